pub mod constants;
pub mod credential;
pub mod model_resolver;
