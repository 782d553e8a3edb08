pub mod build_zone;

pub use build_zone::BuildZoneUseCase;
