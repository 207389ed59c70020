mod publish;

pub use publish::publish;
