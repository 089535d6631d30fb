mod filiere_repo;
mod stagiaire_repo;
mod stats_repo;
mod utilisateur_repo;

pub use filiere_repo::FiliereRepo;
pub use stagiaire_repo::StagiaireRepo;
pub use stats_repo::StatsRepo;
pub use utilisateur_repo::UtilisateurRepo;
