pub mod config;
pub mod descriptor;
pub mod emitter;
pub mod generate;
pub mod logging;
pub mod sink;
pub mod utils;
pub mod xml;

pub use emitter::{ConfigEmitter, EmitError, Emission, PLUGIN_XML_PATH};
pub use ideaxml_model as model;
pub use sink::{DirSink, MemorySink, ResourceSink};
