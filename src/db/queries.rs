pub const SELECT_DISTINCT_LOC_IDS: &str = r#"
SELECT DISTINCT loc_id FROM real_location WHERE loc_id IS NOT NULL;
"#;

pub const SELECT_ZONE_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM zones WHERE loc_id = $1) AS present;
"#;

pub const COUNT_DISTRESS_FOR_LOCATION: &str = r#"
SELECT COUNT(*) AS distress_count
FROM distress d
JOIN real_location rl ON d.real_id = rl.id
WHERE rl.loc_id = $1;
"#;

pub const COUNT_REPORTS_FOR_LOCATION: &str = r#"
SELECT COUNT(*) AS report_count FROM report WHERE loc_id = $1;
"#;

pub const INSERT_ZONE: &str = r#"
INSERT INTO zones (type, loc_id) VALUES ($1, $2)
ON CONFLICT (loc_id) DO NOTHING;
"#;

pub const SELECT_ALL_ZONES: &str = r#"
SELECT
    z.id,
    z.type,
    l.name AS location_name,
    l.latitude,
    l.longitude,
    (
        SELECT COUNT(*)
        FROM distress d
        JOIN real_location rl ON d.real_id = rl.id
        WHERE rl.loc_id = z.loc_id
    ) AS distress_count,
    (
        SELECT COUNT(*)
        FROM report r
        WHERE r.loc_id = z.loc_id
    ) AS report_count
FROM zones z
INNER JOIN location l ON z.loc_id = l.id
ORDER BY l.name, z.id;
"#;

pub const SELECT_ZONE_BY_ID: &str = r#"
SELECT z.id, z.type, l.name AS location_name
FROM zones z
INNER JOIN location l ON z.loc_id = l.id
WHERE z.id = $1;
"#;

pub const INSERT_LOCATION: &str = r#"
INSERT INTO location (name, latitude, longitude)
VALUES ($1, $2, $3)
RETURNING id, name, latitude, longitude;
"#;

pub const INSERT_REAL_LOCATION: &str = r#"
INSERT INTO real_location (user_id, loc_id, latitude, longitude, location_at)
VALUES ($1, $2, $3, $4, now())
RETURNING id, user_id, loc_id, latitude, longitude, location_at;
"#;

pub const UPDATE_REAL_LOCATION_LOC_ID: &str = r#"
UPDATE real_location SET loc_id = $1 WHERE id = $2;
"#;

pub const SELECT_LATEST_REAL_LOCATION: &str = r#"
SELECT id, user_id, loc_id, latitude, longitude, location_at
FROM real_location
WHERE user_id = $1
ORDER BY location_at DESC, id DESC
LIMIT 1;
"#;

pub const INSERT_DISTRESS: &str = r#"
INSERT INTO distress (description, user_id, real_id, distress_at)
VALUES ($1, $2, $3, now())
RETURNING id, description, user_id, real_id, distress_at;
"#;

pub const INSERT_REPORT: &str = r#"
INSERT INTO report (user_report, address, loc_id, user_id, reported_at)
VALUES ($1, $2, $3, $4, now())
RETURNING id, user_report, address, loc_id, user_id, reported_at;
"#;
