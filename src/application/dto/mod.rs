/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod trim_request;
mod trim_response;

pub use output_format::OutputFormat;
pub use trim_request::TrimRequest;
pub use trim_response::TrimResponse;
