// src/vehicle.rs - Vehicle capability trait

/// Behavioral contract for anything that can be started.
///
/// Callers hold a `Box<dyn Vehicle>` (or `&dyn Vehicle`) and invoke
/// [`start`](Vehicle::start) through it; only this one operation is
/// visible through such a binding, whatever else the concrete type
/// carries. Which implementation runs is resolved at the call site
/// through the trait object, not by inspecting the concrete type.
pub trait Vehicle {
    /// Start the vehicle, writing a single status line to standard output.
    fn start(&self);
}
