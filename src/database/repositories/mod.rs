pub mod license;
pub mod medical;
pub mod vacation;

// Re-export all repositories for easy importing
pub use license::LicenseRepository;
pub use medical::MedicalRepository;
pub use vacation::VacationRepository;
