//! Replication of Wavefront files with updated vertex positions.

pub use self::float_format::format_float;
pub use self::obj_replication::replicate_obj;
pub use self::registration_exporter::{
    ExportError, ExporterConfig, ExporterEvent, RegistrationExporter,
};

mod float_format;
mod obj_replication;
mod registration_exporter;
