/// Use cases module containing application business logic orchestration
mod trim_relations;

pub use trim_relations::TrimRelationsUseCase;
