pub mod lookup_host;

pub use lookup_host::{Answer, AnswerData, LookupHostUseCase, LookupRequest, LookupResult};
