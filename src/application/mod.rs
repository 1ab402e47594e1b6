// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only: these modules call the data and
// infra layers in order and hand results back to the CLI.
// No parsing, encoding or formatting logic lives here.
//
// Reference: Clean Architecture pattern

// Load → alphabet → encode → report
pub mod embed_use_case;

// Load → alphabet → encode → summary on stdout
pub mod inspect_use_case;
