//! Integration tests for entity CRUD operations.
//!
//! Exercises the full repository layer against a real database:
//! - Create full hierarchy (cliente -> projeto -> atividade)
//! - Cascade delete behaviour
//! - Unique and check constraint violations
//! - Foreign key violations
//! - Update, list, and list-by-parent operations

use chrono::NaiveDate;
use gestao_core::projeto::ProjetoStatus;
use gestao_db::models::atividade::AtividadeFields;
use gestao_db::models::cliente::ClienteFields;
use gestao_db::models::projeto::ProjetoFields;
use gestao_db::repositories::{AtividadeRepo, ClienteRepo, ProjetoRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_cliente(nome: &str, email: &str) -> ClienteFields {
    ClienteFields {
        nome: nome.to_string(),
        email: email.to_string(),
        telefone: Some("+5511972345738".to_string()),
    }
}

fn new_projeto(cliente_id: i64, nome: &str) -> ProjetoFields {
    ProjetoFields {
        nome: nome.to_string(),
        descricao: "Primeiro Projeto".to_string(),
        cliente_id,
        status: ProjetoStatus::default(),
    }
}

fn new_atividade(projeto_id: i64, descricao: &str) -> AtividadeFields {
    AtividadeFields {
        projeto_id,
        descricao: descricao.to_string(),
        prazo: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("cliente1", "cliente1@email.com"))
        .await
        .unwrap();
    assert_eq!(cliente.nome, "cliente1");
    assert_eq!(cliente.telefone.as_deref(), Some("+5511972345738"));

    let projeto = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "projeto1"))
        .await
        .unwrap();
    assert_eq!(projeto.cliente_id, cliente.id);
    assert_eq!(projeto.status, ProjetoStatus::EmAndamento);

    let atividade = AtividadeRepo::create(&pool, &new_atividade(projeto.id, "Primeira Atividade"))
        .await
        .unwrap();
    assert_eq!(atividade.projeto_id, projeto.id);
    assert_eq!(atividade.prazo, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

    let found = AtividadeRepo::find_by_id(&pool, atividade.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, atividade);
}

// ---------------------------------------------------------------------------
// Test: Cascade delete cliente removes projetos and atividades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_cliente(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("Cascade", "cascade@email.com"))
        .await
        .unwrap();
    let projeto = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "P"))
        .await
        .unwrap();
    let atividade = AtividadeRepo::create(&pool, &new_atividade(projeto.id, "A"))
        .await
        .unwrap();

    assert!(ClienteRepo::delete(&pool, cliente.id).await.unwrap());

    assert!(ClienteRepo::find_by_id(&pool, cliente.id).await.unwrap().is_none());
    assert!(ProjetoRepo::find_by_id(&pool, projeto.id).await.unwrap().is_none());
    assert!(AtividadeRepo::find_by_id(&pool, atividade.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_projeto_keeps_cliente(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("Keep", "keep@email.com"))
        .await
        .unwrap();
    let projeto = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "P"))
        .await
        .unwrap();
    let sibling = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "Sibling"))
        .await
        .unwrap();
    AtividadeRepo::create(&pool, &new_atividade(projeto.id, "A1"))
        .await
        .unwrap();
    AtividadeRepo::create(&pool, &new_atividade(projeto.id, "A2"))
        .await
        .unwrap();
    let other = AtividadeRepo::create(&pool, &new_atividade(sibling.id, "B1"))
        .await
        .unwrap();

    assert!(ProjetoRepo::delete(&pool, projeto.id).await.unwrap());

    assert!(ClienteRepo::exists(&pool, cliente.id).await.unwrap());
    assert!(AtividadeRepo::list_by_projeto(&pool, projeto.id)
        .await
        .unwrap()
        .is_empty());
    let remaining = AtividadeRepo::list(&pool).await.unwrap();
    assert_eq!(remaining, vec![other]);
}

// ---------------------------------------------------------------------------
// Test: Delete of a missing row reports false
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_false(pool: PgPool) {
    assert!(!ClienteRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!ProjetoRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!AtividadeRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    ClienteRepo::create(&pool, &new_cliente("A", "same@email.com"))
        .await
        .unwrap();
    let err = ClienteRepo::create(&pool, &new_cliente("B", "same@email.com"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
    assert_eq!(
        db_err.constraint(),
        Some(gestao_db::repositories::cliente_repo::EMAIL_UNIQUE_CONSTRAINT)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_uniqueness_is_case_sensitive(pool: PgPool) {
    ClienteRepo::create(&pool, &new_cliente("A", "case@email.com"))
        .await
        .unwrap();
    assert!(ClienteRepo::create(&pool, &new_cliente("B", "CASE@email.com"))
        .await
        .is_ok());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_taken_excludes_self(pool: PgPool) {
    let a = ClienteRepo::create(&pool, &new_cliente("A", "a@email.com"))
        .await
        .unwrap();

    assert!(ClienteRepo::email_taken(&pool, "a@email.com", None)
        .await
        .unwrap());
    assert!(!ClienteRepo::email_taken(&pool, "a@email.com", Some(a.id))
        .await
        .unwrap());
    assert!(!ClienteRepo::email_taken(&pool, "b@email.com", None)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_phone_rejected_by_check(pool: PgPool) {
    let mut input = new_cliente("Phone", "phone@email.com");
    input.telefone = Some("ABCDEF".to_string());
    assert!(ClienteRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projeto_with_missing_cliente_rejected(pool: PgPool) {
    let err = ProjetoRepo::create(&pool, &new_projeto(999_999, "Orphan"))
        .await
        .unwrap_err();
    assert!(err
        .as_database_error()
        .is_some_and(|e| e.is_foreign_key_violation()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_atividade_with_missing_projeto_rejected(pool: PgPool) {
    assert!(AtividadeRepo::create(&pool, &new_atividade(999_999, "Orphan"))
        .await
        .is_err());
}

// ---------------------------------------------------------------------------
// Test: Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("Old", "old@email.com"))
        .await
        .unwrap();

    let updated = ClienteRepo::update(
        &pool,
        cliente.id,
        &ClienteFields {
            nome: "New Name".to_string(),
            email: "newemail@example.com".to_string(),
            telefone: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.id, cliente.id);
    assert_eq!(updated.nome, "New Name");
    assert_eq!(updated.email, "newemail@example.com");
    assert_eq!(updated.telefone, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ClienteRepo::update(&pool, 999_999, &new_cliente("X", "x@email.com"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_preserves_data_criacao(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("C", "c@email.com"))
        .await
        .unwrap();
    let p1 = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "P1"))
        .await
        .unwrap();
    let p2 = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "P2"))
        .await
        .unwrap();
    let atividade = AtividadeRepo::create(&pool, &new_atividade(p1.id, "Before"))
        .await
        .unwrap();

    let updated = AtividadeRepo::update(
        &pool,
        atividade.id,
        &AtividadeFields {
            projeto_id: p2.id,
            descricao: "After".to_string(),
            prazo: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.data_criacao, atividade.data_criacao);
    assert_eq!(updated.projeto_id, p2.id);
    assert_eq!(updated.descricao, "After");
    assert_eq!(updated.prazo, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_projeto_status(pool: PgPool) {
    let cliente = ClienteRepo::create(&pool, &new_cliente("S", "s@email.com"))
        .await
        .unwrap();
    let projeto = ProjetoRepo::create(&pool, &new_projeto(cliente.id, "P"))
        .await
        .unwrap();

    let mut fields = new_projeto(cliente.id, "P");
    fields.status = ProjetoStatus::Concluido;
    let updated = ProjetoRepo::update(&pool, projeto.id, &fields)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ProjetoStatus::Concluido);
}

// ---------------------------------------------------------------------------
// Test: List and list-by-parent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_in_insertion_order(pool: PgPool) {
    let a = ClienteRepo::create(&pool, &new_cliente("A", "a@email.com"))
        .await
        .unwrap();
    let b = ClienteRepo::create(&pool, &new_cliente("B", "b@email.com"))
        .await
        .unwrap();

    let all = ClienteRepo::list(&pool).await.unwrap();
    assert_eq!(all, vec![a, b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_parent(pool: PgPool) {
    let with = ClienteRepo::create(&pool, &new_cliente("With", "with@email.com"))
        .await
        .unwrap();
    let without = ClienteRepo::create(&pool, &new_cliente("Without", "without@email.com"))
        .await
        .unwrap();
    let projeto = ProjetoRepo::create(&pool, &new_projeto(with.id, "P"))
        .await
        .unwrap();

    let projetos = ProjetoRepo::list_by_cliente(&pool, with.id).await.unwrap();
    assert_eq!(projetos, vec![projeto]);

    assert!(ProjetoRepo::list_by_cliente(&pool, without.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ProjetoRepo::list_by_cliente(&pool, 999_999)
        .await
        .unwrap()
        .is_empty());
}
