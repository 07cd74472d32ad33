// Application layer: wires CLI commands to the drills and adapters.

pub mod runner;
