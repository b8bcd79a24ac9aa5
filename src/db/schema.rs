pub const CREATE_LOCATION: &str = r#"
CREATE TABLE IF NOT EXISTS location (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL
);
"#;

pub const CREATE_REAL_LOCATION: &str = r#"
CREATE TABLE IF NOT EXISTS real_location (
    id BIGSERIAL PRIMARY KEY,
    user_id BIGINT NOT NULL,
    loc_id BIGINT REFERENCES location(id),
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL,
    location_at TIMESTAMP NOT NULL DEFAULT now()
);
"#;

pub const CREATE_DISTRESS: &str = r#"
CREATE TABLE IF NOT EXISTS distress (
    id BIGSERIAL PRIMARY KEY,
    description TEXT NOT NULL,
    user_id BIGINT NOT NULL,
    real_id BIGINT NOT NULL REFERENCES real_location(id),
    distress_at TIMESTAMP NOT NULL DEFAULT now()
);
"#;

pub const CREATE_REPORT: &str = r#"
CREATE TABLE IF NOT EXISTS report (
    id BIGSERIAL PRIMARY KEY,
    user_report TEXT NOT NULL,
    address TEXT,
    loc_id BIGINT NOT NULL REFERENCES location(id),
    user_id BIGINT NOT NULL,
    reported_at TIMESTAMP NOT NULL DEFAULT now()
);
"#;

// UNIQUE(loc_id): concurrent classifier passes racing on the same
// location resolve at the constraint instead of double-inserting.
pub const CREATE_ZONES: &str = r#"
CREATE TABLE IF NOT EXISTS zones (
    id BIGSERIAL PRIMARY KEY,
    type TEXT NOT NULL,
    loc_id BIGINT NOT NULL UNIQUE REFERENCES location(id)
);
"#;

/// Dependency order: parents before children.
pub const ALL_TABLES: &[&str] = &[
    CREATE_LOCATION,
    CREATE_REAL_LOCATION,
    CREATE_DISTRESS,
    CREATE_REPORT,
    CREATE_ZONES,
];
