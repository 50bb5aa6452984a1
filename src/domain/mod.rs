// Domain layer: core models. No external dependencies beyond std.

pub mod model;
