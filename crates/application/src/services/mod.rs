mod nameserver_resolver;

pub use nameserver_resolver::NameserverResolver;
