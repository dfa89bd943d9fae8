//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use cosmereview::db::{AccessScope, DbPool, establish_connection_pool};
use cosmereview::repository::DieselRepository;
use cosmereview::schema::{products, reviews, videos};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(
            tempfile.path().to_str().unwrap(),
            AccessScope::Privileged,
        )
        .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb { tempfile, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &str {
        self.tempfile.path().to_str().unwrap()
    }

    /// Repository over the same file opened in `scope`.
    pub fn repo(&self, scope: AccessScope) -> DieselRepository {
        match scope {
            AccessScope::Privileged => DieselRepository::new(self.pool(), scope),
            AccessScope::Anonymous => {
                DieselRepository::connect(self.path(), scope)
                    .expect("Failed to open read-only pool")
            }
        }
    }
}

pub fn at(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

pub fn insert_product(
    conn: &mut SqliteConnection,
    id: &str,
    name: &str,
    brand: Option<&str>,
    category: Option<&str>,
    description: Option<&str>,
    created: i64,
) {
    diesel::insert_into(products::table)
        .values((
            products::id.eq(id),
            products::name.eq(name),
            products::brand.eq(brand),
            products::category.eq(category),
            products::description.eq(description),
            products::created_at.eq(at(created)),
        ))
        .execute(conn)
        .expect("should insert product");
}

pub fn insert_video(conn: &mut SqliteConnection, id: &str, title: &str, channel: Option<&str>) {
    diesel::insert_into(videos::table)
        .values((
            videos::id.eq(id),
            videos::title.eq(Some(title)),
            videos::channel_name.eq(channel),
            videos::thumbnail_url.eq(Some(format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"))),
        ))
        .execute(conn)
        .expect("should insert video");
}

pub fn insert_review(
    conn: &mut SqliteConnection,
    id: &str,
    product_id: &str,
    video_id: &str,
    timestamp_seconds: i32,
    sentiment: &str,
) {
    diesel::insert_into(reviews::table)
        .values((
            reviews::id.eq(id),
            reviews::product_id.eq(product_id),
            reviews::video_id.eq(video_id),
            reviews::timestamp_seconds.eq(timestamp_seconds),
            reviews::sentiment.eq(Some(sentiment)),
            reviews::summary.eq(Some(format!("review {id}"))),
            reviews::created_at.eq(at(0)),
        ))
        .execute(conn)
        .expect("should insert review");
}

/// Seeds a small catalog:
///
/// * `p1` Rose Tint / Lumi / Lip, newest, reviewed by Mika (A) and Aya (B)
/// * `p2` Velvet Balm / RoseLab / Lip, no reviews
/// * `p3` Night Serum / Lumi / Skincare, description mentions ROSE, reviewed by Aya
/// * `p4` Plain Toner, no brand or category, features "N/A", review with a missing video
pub fn seed_catalog(pool: &DbPool) {
    let mut conn = pool.get().expect("should acquire DB connection for setup");
    let conn = &mut *conn;

    insert_product(conn, "p1", "Rose Tint", Some("Lumi"), Some("Lip"), None, 40);
    insert_product(conn, "p2", "Velvet Balm", Some("RoseLab"), Some("Lip"), None, 30);
    insert_product(
        conn,
        "p3",
        "Night Serum",
        Some("Lumi"),
        Some("Skincare"),
        Some("Smells of ROSE water"),
        20,
    );
    insert_product(conn, "p4", "Plain Toner", Some(""), None, None, 10);
    diesel::update(products::table.filter(products::id.eq("p1")))
        .set(products::features.eq(Some(r#"["long wear","sheer"]"#)))
        .execute(conn)
        .expect("should set features");
    diesel::update(products::table.filter(products::id.eq("p4")))
        .set(products::features.eq(Some("N/A")))
        .execute(conn)
        .expect("should set features");

    insert_video(conn, "A", "Spring picks", Some("Mika"));
    insert_video(conn, "B", "Lip haul", Some("Aya"));
    insert_video(conn, "C", "Untitled", None);

    insert_review(conn, "r1", "p1", "A", 10, "positive");
    insert_review(conn, "r2", "p1", "B", 5, "positive");
    insert_review(conn, "r3", "p1", "A", 20, "negative");
    insert_review(conn, "r4", "p3", "B", 90, "positive");
    insert_review(conn, "r5", "p4", "gone", 3, "neutral");
}
