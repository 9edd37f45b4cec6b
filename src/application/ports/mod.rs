mod clock;
mod conversation_repository;
mod repository_error;

pub use clock::Clock;
pub use conversation_repository::ConversationRepository;
pub use repository_error::RepositoryError;
