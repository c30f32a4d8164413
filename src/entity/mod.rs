pub mod ambient_temperature;
