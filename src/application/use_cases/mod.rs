/// Use cases module containing application business logic orchestration
mod publish_bom;

pub use publish_bom::PublishBomUseCase;
