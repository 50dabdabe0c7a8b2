pub mod bank_merger;
pub mod bank_store;
pub mod llm_service;
pub mod template_generator;

pub use bank_store::BankStore;
pub use llm_service::LlmService;
