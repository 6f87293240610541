/// Protocol adapters
pub mod directive;
pub mod remote;

pub use directive::DirectiveAdapter;
pub use remote::RemoteAdapter;
