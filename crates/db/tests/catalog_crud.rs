//! Integration tests for the repository layer against a real database:
//! - CRUD on all three tables
//! - Filtered + paginated listing and match counts
//! - Foreign key and unique constraint violations
//! - The filière delete guard

use sqlx::PgPool;
use stagium_db::models::filiere::{CreateFiliere, UpdateFiliere};
use stagium_db::models::stagiaire::{CreateStagiaire, UpdateStagiaire};
use stagium_db::models::utilisateur::{CreateUtilisateur, UpdateUtilisateur};
use stagium_db::repositories::{FiliereRepo, StagiaireRepo, StatsRepo, UtilisateurRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_filiere(nom: &str, niveau: &str) -> CreateFiliere {
    CreateFiliere {
        nom_filiere: nom.to_string(),
        niveau: niveau.to_string(),
    }
}

fn new_stagiaire(nom: &str, prenom: &str, id_filiere: i64) -> CreateStagiaire {
    CreateStagiaire {
        nom: nom.to_string(),
        prenom: prenom.to_string(),
        civilite: "M".to_string(),
        id_filiere,
        photo: Some("img1.jpg".to_string()),
    }
}

fn new_utilisateur(login: &str, role: &str) -> CreateUtilisateur {
    CreateUtilisateur {
        login: login.to_string(),
        email: format!("{login}@test.com"),
        pwd: "$argon2id$fake-hash-for-tests".to_string(),
        role: role.to_string(),
        avatar: "img2.jpg".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Filière CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_create_and_find(pool: PgPool) {
    let created = FiliereRepo::create(&pool, &new_filiere("Développement Web", "Technicien Spécialisé"))
        .await
        .expect("create should succeed");
    assert!(created.id > 0);
    assert_eq!(created.niveau, "Technicien Spécialisé");

    let found = FiliereRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("row must exist");
    assert_eq!(found.nom_filiere, "Développement Web");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_find_missing_returns_none(pool: PgPool) {
    let found = FiliereRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_update_is_partial(pool: PgPool) {
    let created = FiliereRepo::create(&pool, &new_filiere("Réseaux", "Technicien"))
        .await
        .unwrap();

    let updated = FiliereRepo::update(
        &pool,
        created.id,
        &UpdateFiliere {
            nom_filiere: Some("Réseaux Informatiques".to_string()),
            niveau: None,
        },
    )
    .await
    .unwrap()
    .expect("row must exist");

    assert_eq!(updated.nom_filiere, "Réseaux Informatiques");
    // Unchanged field keeps its value.
    assert_eq!(updated.niveau, "Technicien");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_niveau_check_constraint(pool: PgPool) {
    let result = FiliereRepo::create(&pool, &new_filiere("Bogus", "Doctorat")).await;
    assert!(result.is_err(), "invalid niveau must violate the CHECK");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_list_search_and_niveau_filter(pool: PgPool) {
    FiliereRepo::create(&pool, &new_filiere("Cybersécurité", "Technicien"))
        .await
        .unwrap();
    FiliereRepo::create(&pool, &new_filiere("Développement Web", "Technicien Spécialisé"))
        .await
        .unwrap();
    FiliereRepo::create(&pool, &new_filiere("Gestion", "Qualification"))
        .await
        .unwrap();

    // Substring search is case-insensitive.
    let hits = FiliereRepo::list_filtered(&pool, Some("cyber"), None, 10, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].nom_filiere, "Cybersécurité");

    // Niveau filter excludes non-matching rows.
    let quals = FiliereRepo::list_filtered(&pool, None, Some("Qualification"), 10, 0)
        .await
        .unwrap();
    assert_eq!(quals.len(), 1);
    assert_eq!(quals[0].nom_filiere, "Gestion");

    let count = FiliereRepo::count_filtered(&pool, None, Some("Qualification"))
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_list_pagination_and_total(pool: PgPool) {
    for i in 0..5 {
        FiliereRepo::create(&pool, &new_filiere(&format!("Filière {i}"), "Technicien"))
            .await
            .unwrap();
    }

    // Page size is honored, ordering is id ascending.
    let page1 = FiliereRepo::list_filtered(&pool, None, None, 2, 0).await.unwrap();
    let page2 = FiliereRepo::list_filtered(&pool, None, None, 2, 2).await.unwrap();
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 2);
    assert!(page1[1].id < page2[0].id);

    // Total is independent of pagination.
    let total = FiliereRepo::count_filtered(&pool, None, None).await.unwrap();
    assert_eq!(total, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filiere_delete(pool: PgPool) {
    let created = FiliereRepo::create(&pool, &new_filiere("Temporaire", "Qualification"))
        .await
        .unwrap();

    assert!(FiliereRepo::delete(&pool, created.id).await.unwrap());
    assert!(FiliereRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    // Second delete finds nothing.
    assert!(!FiliereRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Stagiaire CRUD + join
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_stagiaire_create_and_find_with_filiere(pool: PgPool) {
    let filiere = FiliereRepo::create(&pool, &new_filiere("Développement Web", "Technicien Spécialisé"))
        .await
        .unwrap();

    let created = StagiaireRepo::create(&pool, &new_stagiaire("El Amrani", "Yassine", filiere.id))
        .await
        .unwrap();
    assert_eq!(created.id_filiere, filiere.id);

    let found = StagiaireRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row must exist");
    assert_eq!(found.nom, "El Amrani");
    assert_eq!(found.filiere.id, filiere.id);
    assert_eq!(found.filiere.nom_filiere, "Développement Web");
    assert_eq!(found.filiere.niveau, "Technicien Spécialisé");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stagiaire_create_with_missing_filiere_fails(pool: PgPool) {
    let result = StagiaireRepo::create(&pool, &new_stagiaire("Orphelin", "Sans", 999_999)).await;
    assert!(result.is_err(), "FK violation expected");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stagiaire_search_matches_nom_or_prenom(pool: PgPool) {
    let filiere = FiliereRepo::create(&pool, &new_filiere("Gestion", "Qualification"))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Benali", "Fatima", filiere.id))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Fassi", "Karim", filiere.id))
        .await
        .unwrap();

    // "fa" hits Benali via prenom (Fatima) and Fassi via nom.
    let hits = StagiaireRepo::list_filtered(&pool, Some("fa"), None, 10, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);

    let count = StagiaireRepo::count_filtered(&pool, Some("fa"), None).await.unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stagiaire_filter_by_filiere(pool: PgPool) {
    let web = FiliereRepo::create(&pool, &new_filiere("Web", "Technicien"))
        .await
        .unwrap();
    let reseaux = FiliereRepo::create(&pool, &new_filiere("Réseaux", "Technicien"))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Alami", "Sara", web.id))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Tazi", "Omar", reseaux.id))
        .await
        .unwrap();

    let hits = StagiaireRepo::list_filtered(&pool, None, Some(web.id), 10, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].nom, "Alami");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stagiaire_update_round_trip(pool: PgPool) {
    let filiere = FiliereRepo::create(&pool, &new_filiere("Web", "Technicien"))
        .await
        .unwrap();
    let other = FiliereRepo::create(&pool, &new_filiere("Réseaux", "Technicien"))
        .await
        .unwrap();
    let created = StagiaireRepo::create(&pool, &new_stagiaire("Alami", "Sara", filiere.id))
        .await
        .unwrap();

    let updated = StagiaireRepo::update(
        &pool,
        created.id,
        &UpdateStagiaire {
            nom: None,
            prenom: Some("Salma".to_string()),
            civilite: None,
            id_filiere: Some(other.id),
            photo: None,
        },
    )
    .await
    .unwrap()
    .expect("row must exist");

    assert_eq!(updated.prenom, "Salma");
    assert_eq!(updated.id_filiere, other.id);
    // Unchanged fields survive the update.
    assert_eq!(updated.nom, "Alami");
    assert_eq!(updated.photo, "img1.jpg");

    let reread = StagiaireRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.prenom, "Salma");
    assert_eq!(reread.filiere.nom_filiere, "Réseaux");
}

// ---------------------------------------------------------------------------
// Filière delete guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_referenced_filiere_delete_guard(pool: PgPool) {
    let filiere = FiliereRepo::create(&pool, &new_filiere("Web", "Technicien"))
        .await
        .unwrap();
    let stagiaire = StagiaireRepo::create(&pool, &new_stagiaire("Alami", "Sara", filiere.id))
        .await
        .unwrap();

    let refs = StagiaireRepo::count_by_filiere(&pool, filiere.id).await.unwrap();
    assert_eq!(refs, 1);

    // The FK RESTRICT backstop rejects the raw delete and leaves both rows.
    assert!(FiliereRepo::delete(&pool, filiere.id).await.is_err());
    assert!(FiliereRepo::find_by_id(&pool, filiere.id).await.unwrap().is_some());
    assert!(StagiaireRepo::find_by_id(&pool, stagiaire.id).await.unwrap().is_some());

    // Once the stagiaire is gone the delete goes through.
    assert!(StagiaireRepo::delete(&pool, stagiaire.id).await.unwrap());
    assert!(FiliereRepo::delete(&pool, filiere.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Utilisateur CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_utilisateur_create_and_find_by_login(pool: PgPool) {
    let created = UtilisateurRepo::create(&pool, &new_utilisateur("admin", "ADMIN"))
        .await
        .unwrap();
    assert!(created.etat, "etat must default to true");

    let found = UtilisateurRepo::find_by_login(&pool, "admin")
        .await
        .unwrap()
        .expect("row must exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, "ADMIN");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_utilisateur_duplicate_login_violates_unique(pool: PgPool) {
    UtilisateurRepo::create(&pool, &new_utilisateur("sara", "VISITEUR"))
        .await
        .unwrap();
    let result = UtilisateurRepo::create(&pool, &new_utilisateur("sara", "ADMIN")).await;
    assert!(result.is_err(), "unique violation expected on login");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_utilisateur_list_filters(pool: PgPool) {
    UtilisateurRepo::create(&pool, &new_utilisateur("admin", "ADMIN"))
        .await
        .unwrap();
    let visiteur = UtilisateurRepo::create(&pool, &new_utilisateur("visiteur", "VISITEUR"))
        .await
        .unwrap();
    UtilisateurRepo::update(
        &pool,
        visiteur.id,
        &UpdateUtilisateur {
            login: None,
            email: None,
            role: None,
            etat: Some(false),
        },
    )
    .await
    .unwrap();

    let admins = UtilisateurRepo::list_filtered(&pool, None, Some("ADMIN"), None, 10, 0)
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].login, "admin");

    let inactive = UtilisateurRepo::list_filtered(&pool, None, None, Some(false), 10, 0)
        .await
        .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].login, "visiteur");

    let by_search = UtilisateurRepo::count_filtered(&pool, Some("adm"), None, None)
        .await
        .unwrap();
    assert_eq!(by_search, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_utilisateur_update_password(pool: PgPool) {
    let created = UtilisateurRepo::create(&pool, &new_utilisateur("sara", "VISITEUR"))
        .await
        .unwrap();

    let updated = UtilisateurRepo::update_password(&pool, created.id, "$argon2id$new-hash")
        .await
        .unwrap();
    assert!(updated);

    let reread = UtilisateurRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.pwd, "$argon2id$new-hash");
    assert!(!UtilisateurRepo::update_password(&pool, 999_999, "x").await.unwrap());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_counts(pool: PgPool) {
    let filiere = FiliereRepo::create(&pool, &new_filiere("Web", "Technicien"))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Alami", "Sara", filiere.id))
        .await
        .unwrap();
    StagiaireRepo::create(&pool, &new_stagiaire("Tazi", "Omar", filiere.id))
        .await
        .unwrap();
    UtilisateurRepo::create(&pool, &new_utilisateur("admin", "ADMIN"))
        .await
        .unwrap();

    let stats = StatsRepo::counts(&pool).await.unwrap();
    assert_eq!(stats.stagiaires, 2);
    assert_eq!(stats.filieres, 1);
    assert_eq!(stats.utilisateurs, 1);
}
