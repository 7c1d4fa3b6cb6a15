use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::{DnsRecord, DomainError, RecordClass, RecordType};
use prionis_dns_infrastructure::database::{create_pool, MIGRATOR};
use prionis_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn test_add_and_get_by_id() {
    let repo = SqliteRecordRepository::new(create_test_db().await);

    let record = repo
        .add_record(DnsRecord::new("Example.COM.", RecordType::A, 3600, "127.0.0.1"))
        .await
        .unwrap();

    assert!(record.id.is_some());
    assert_eq!(record.domain, "example.com");
    assert_eq!(record.class, RecordClass::IN);

    let fetched = repo.get_record(record.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn test_find_matches_domain_and_type() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    repo.add_record(DnsRecord::new("example.com", RecordType::A, 60, "10.0.0.1"))
        .await
        .unwrap();
    repo.add_record(DnsRecord::new("example.com", RecordType::A, 60, "10.0.0.2"))
        .await
        .unwrap();
    repo.add_record(DnsRecord::new("example.com", RecordType::MX, 60, "10 mail.example.com"))
        .await
        .unwrap();
    repo.add_record(DnsRecord::new("other.com", RecordType::A, 60, "10.0.0.3"))
        .await
        .unwrap();

    let found = repo.find_records("example.com", RecordType::A).await.unwrap();
    let data: Vec<_> = found.iter().map(|r| r.data.as_str()).collect();
    assert_eq!(data, vec!["10.0.0.1", "10.0.0.2"]);

    assert!(repo
        .find_records("example.com", RecordType::TXT)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_find_unknown_type_code_is_empty() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    repo.add_record(DnsRecord::new("example.com", RecordType::A, 60, "10.0.0.1"))
        .await
        .unwrap();

    assert!(repo
        .find_records("example.com", RecordType(28))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_add_rejects_invalid_record() {
    let repo = SqliteRecordRepository::new(create_test_db().await);

    let result = repo
        .add_record(DnsRecord::new("example.com", RecordType::A, 60, "not-an-ip"))
        .await;

    assert!(result.is_err());
    assert!(repo.get_all_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_record() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let mut record = repo
        .add_record(DnsRecord::new("www.example.com", RecordType::A, 60, "10.0.0.1"))
        .await
        .unwrap();

    record.ttl = 7200;
    record.data = "10.0.0.9".to_string();
    let updated = repo.update_record(record.clone()).await.unwrap();

    assert_eq!(updated, record);
    assert_eq!(
        repo.find_records("www.example.com", RecordType::A)
            .await
            .unwrap()[0]
            .ttl,
        7200
    );
}

#[tokio::test]
async fn test_update_missing_record_is_not_found() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let record = DnsRecord::new("www.example.com", RecordType::A, 60, "10.0.0.1").with_id(42);

    assert!(matches!(
        repo.update_record(record).await,
        Err(DomainError::RecordNotFound(42))
    ));
}

#[tokio::test]
async fn test_delete_record() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let record = repo
        .add_record(DnsRecord::new("www.example.com", RecordType::A, 60, "10.0.0.1"))
        .await
        .unwrap();
    let id = record.id.unwrap();

    repo.delete_record(id).await.unwrap();

    assert!(repo.get_record(id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete_record(id).await,
        Err(DomainError::RecordNotFound(_))
    ));
}

#[tokio::test]
async fn test_get_all_in_insertion_order() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    for host in ["c", "a", "b"] {
        repo.add_record(DnsRecord::new(
            format!("{host}.example.com"),
            RecordType::TXT,
            60,
            "v=spf1 -all",
        ))
        .await
        .unwrap();
    }

    let domains: Vec<_> = repo
        .get_all_records()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.domain)
        .collect();
    assert_eq!(domains, vec!["c.example.com", "a.example.com", "b.example.com"]);
}

#[tokio::test]
async fn test_create_pool_runs_migrations_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("records.db").display());

    let pool = create_pool(&url, 2).await.unwrap();
    let repo = SqliteRecordRepository::new(pool);

    repo.add_record(DnsRecord::new("example.com", RecordType::A, 60, "10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(repo.get_all_records().await.unwrap().len(), 1);
}
