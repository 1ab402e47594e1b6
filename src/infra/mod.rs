// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Output-side file handling:
//
//   report_writer.rs - the plain-text embeddings report
//                      (implements domain::traits::ReportSink)
//
//   config_store.rs  - JSON config loading and the optional
//                      JSON summary sidecar
//
// Reference: Rust Book §7 (Modules)

/// Plain-text report serialisation
pub mod report_writer;

/// JSON config and summary persistence
pub mod config_store;
