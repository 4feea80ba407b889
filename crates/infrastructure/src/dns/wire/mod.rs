pub mod message_builder;
pub mod rdata;
pub mod record_type_map;
pub mod response_parser;

#[cfg(test)]
pub(crate) mod fixtures;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{rcode_name, ParsedResponse, ResponseParser};
