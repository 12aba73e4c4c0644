//! Byte-exact CREATE TABLE / CREATE INDEX output for every dialect.

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;

use ddlkit::prelude::*;

fn person_columns() -> Vec<Column> {
    vec![
        Column::of::<u64>("id").primary_key().auto_increment(),
        Column::of::<String>("name").size(200).unique(),
        Column::of::<Option<String>>("info"),
        Column::of::<DateTime<Utc>>("created_at"),
        Column::of::<DateTime<Utc>>("updated_at"),
    ]
}

fn person_indices() -> Vec<Index> {
    vec![
        Index::new("key1", ["created_at", "updated_at"]),
        Index::new("key2", ["created_at", "updated_at"]).unique(),
    ]
}

fn people(dialect: &Dialect) -> Table {
    let mut table = Builder::new(dialect).table("people");
    for column in person_columns() {
        table.add_column(column).unwrap();
    }
    for index in person_indices() {
        table.add_index(index).unwrap();
    }
    table
}

fn students(dialect: &Dialect) -> Table {
    let builder = Builder::new(dialect);
    let mut person = builder.table("people");
    for column in person_columns() {
        person.add_column(column).unwrap();
    }

    let mut table = builder.table("students");
    table
        .embed(&person)
        .unwrap()
        .add_column(Column::of::<String>("class_room"))
        .unwrap()
        .add_column(Column::of::<i32>("grade"))
        .unwrap();
    for index in person_indices() {
        table.add_index(index).unwrap();
    }
    table
}

#[test]
fn people_mysql() {
    let table = people(&Dialect::mysql("utf8", "InnoDB"));
    let expected = r#"CREATE TABLE IF NOT EXISTS `people`(
`id` BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY,
`name` VARCHAR(200) NOT NULL UNIQUE,
`info` VARCHAR(255) ,
`created_at` DATETIME NOT NULL,
`updated_at` DATETIME NOT NULL
) ENGINE=InnoDB DEFAULT CHARACTER SET=utf8;
CREATE INDEX `key1` ON `people` (`created_at`,`updated_at`);
CREATE UNIQUE INDEX `key2` ON `people` (`created_at`,`updated_at`);
"#;
    assert_eq!(table.to_sql(), expected);
}

#[test]
fn people_sqlite() {
    let table = people(&Dialect::Sqlite);
    let expected = r#"CREATE TABLE IF NOT EXISTS "people"(
"id" integer AUTOINCREMENT NOT NULL PRIMARY KEY,
"name" text NOT NULL UNIQUE,
"info" text ,
"created_at" datetime NOT NULL,
"updated_at" datetime NOT NULL
);
CREATE INDEX "key1" ON "people" ("created_at","updated_at");
CREATE UNIQUE INDEX "key2" ON "people" ("created_at","updated_at");
"#;
    assert_eq!(table.to_sql(), expected);
}

#[test]
fn people_postgres() {
    let table = people(&Dialect::Postgres);
    let expected = r#"CREATE TABLE IF NOT EXISTS "people"(
"id" BIGSERIAL NOT NULL PRIMARY KEY,
"name" VARCHAR(200) NOT NULL UNIQUE,
"info" VARCHAR(255) ,
"created_at" TIMESTAMP WITH TIME ZONE NOT NULL,
"updated_at" TIMESTAMP WITH TIME ZONE NOT NULL
);
CREATE INDEX "key1" ON "people" ("created_at","updated_at");
CREATE UNIQUE INDEX "key2" ON "people" ("created_at","updated_at");
"#;
    assert_eq!(table.to_sql(), expected);
}

#[test]
fn students_embed_people_mysql() {
    let table = students(&Dialect::mysql("utf8", "InnoDB"));
    let expected = r#"CREATE TABLE IF NOT EXISTS `students`(
`id` BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY,
`name` VARCHAR(200) NOT NULL UNIQUE,
`info` VARCHAR(255) ,
`created_at` DATETIME NOT NULL,
`updated_at` DATETIME NOT NULL,
`class_room` VARCHAR(255) NOT NULL,
`grade` INT NOT NULL
) ENGINE=InnoDB DEFAULT CHARACTER SET=utf8;
CREATE INDEX `key1` ON `students` (`created_at`,`updated_at`);
CREATE UNIQUE INDEX `key2` ON `students` (`created_at`,`updated_at`);
"#;
    assert_eq!(table.to_sql(), expected);
}

#[test]
fn plain_create_table_has_no_terminator() {
    let table = people(&Dialect::Postgres);
    assert!(table.create_table_sql().starts_with("CREATE TABLE \"people\"(\n"));
    assert!(table.create_table_sql().ends_with("NOT NULL\n)"));
    assert_eq!(
        table.create_index_sqls(),
        [
            "CREATE INDEX \"key1\" ON \"people\" (\"created_at\",\"updated_at\")",
            "CREATE UNIQUE INDEX \"key2\" ON \"people\" (\"created_at\",\"updated_at\")",
        ]
    );
}

#[test]
fn rendering_twice_is_identical() {
    for dialect in [Dialect::mysql("utf8", "InnoDB"), Dialect::Postgres, Dialect::Sqlite] {
        let table = students(&dialect);
        assert_eq!(table.to_sql(), table.to_sql());
        assert_eq!(table.create_index_sqls(), table.create_index_sqls());
    }
}

#[test]
fn serial_dialect_never_emits_separate_keyword() {
    let mut table = Builder::new(&Dialect::Postgres).table("counters");
    table
        .add_column(Column::of::<i16>("small").auto_increment())
        .unwrap()
        .add_column(Column::of::<i32>("normal").auto_increment().unique())
        .unwrap()
        .add_column(Column::of::<i64>("big").auto_increment().default("1"))
        .unwrap();
    assert_eq!(
        table.create_table_sql(),
        "CREATE TABLE \"counters\"(\n\
         \"small\" SMALLSERIAL NOT NULL,\n\
         \"normal\" SERIAL NOT NULL UNIQUE,\n\
         \"big\" BIGSERIAL DEFAULT 1 NOT NULL\n\
         )"
    );
}

#[test]
fn size_thresholds_across_dialects() {
    let cases = [
        (0, "VARCHAR(255)", "VARCHAR(255)", "VARBINARY(255)", "BIT VARYING(255)"),
        (65532, "VARCHAR(65532)", "VARCHAR(65532)", "VARBINARY(65532)", "BIT VARYING(65532)"),
        (65534, "MEDIUMTEXT", "TEXT", "MEDIUMBLOB", "BYTEA"),
        (1 << 24, "LONGTEXT", "TEXT", "LONGBLOB", "BYTEA"),
    ];
    let mysql = Dialect::mysql("utf8", "InnoDB").generator();
    let pg = Dialect::Postgres.generator();
    let sqlite = Dialect::Sqlite.generator();

    for (size, my_text, pg_text, my_bin, pg_bin) in cases {
        assert_eq!(mysql.data_type(ColumnType::Text, false, size), my_text);
        assert_eq!(pg.data_type(ColumnType::Text, false, size), pg_text);
        assert_eq!(mysql.data_type(ColumnType::Bytes, false, size), my_bin);
        assert_eq!(pg.data_type(ColumnType::Bytes, false, size), pg_bin);
        assert_eq!(sqlite.data_type(ColumnType::Text, false, size), "text");
        assert_eq!(sqlite.data_type(ColumnType::Bytes, false, size), "blob");
    }
}

#[test]
fn identifiers_are_escaped() {
    let mut table = Builder::new(&Dialect::mysql("utf8", "InnoDB")).table("we`ird");
    table
        .add_column(Column::of::<bool>("col`umn"))
        .unwrap()
        .add_index(Index::new("i`x", ["col`umn"]))
        .unwrap();
    assert_eq!(
        table.to_sql(),
        "CREATE TABLE IF NOT EXISTS `we``ird`(\n`col``umn` BOOLEAN NOT NULL\n) ENGINE=InnoDB DEFAULT CHARACTER SET=utf8;\n\
         CREATE INDEX `i``x` ON `we``ird` (`col``umn`);\n"
    );
}
