// Domain layer: plain data shared by the config and core layers.

pub mod model;
