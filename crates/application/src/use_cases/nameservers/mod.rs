mod inspect_nameservers;

pub use inspect_nameservers::InspectNameserversUseCase;
