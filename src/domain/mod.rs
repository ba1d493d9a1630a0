// Domain layer: the Alexa envelope models and the clock port.

pub mod model;
pub mod ports;
