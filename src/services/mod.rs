pub mod extract_service;
pub mod fallback;
pub mod llm_service;
pub mod prompt_service;
