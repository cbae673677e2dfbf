pub mod snapshot;

pub mod wire;

pub mod frame;
