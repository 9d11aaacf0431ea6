pub mod path_tracer;

pub use path_tracer::{PathTrace, PathTracer, TraceCell};
