// Purpose - external data sources entering the pipeline

pub mod capture;

pub use capture::Capture;
