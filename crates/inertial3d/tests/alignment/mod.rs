mod concrete_scenario;
mod degenerate_inertia;
#[cfg(feature = "wavefront")]
mod export_round_trip;
mod identity;
mod length_mismatch;
mod round_trip;
mod translation_only;
