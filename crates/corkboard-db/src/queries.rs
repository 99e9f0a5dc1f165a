use crate::models::MessageRow;
use crate::{Database, StoreError};
use rusqlite::{Connection, OptionalExtension};

impl Database {
    pub fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError> {
        self.with_conn(query_all_messages)
    }

    pub fn insert_message(&self, content: &str, username: &str) -> Result<MessageRow, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (content, username) VALUES (?1, ?2)",
                (content, username),
            )?;
            Ok(MessageRow {
                id: conn.last_insert_rowid(),
                content: content.to_owned(),
                username: username.to_owned(),
            })
        })
    }

    pub fn get_message(&self, id: i64) -> Result<Option<MessageRow>, StoreError> {
        self.with_conn(|conn| query_message_by_id(conn, id))
    }

    /// Replaces `content` when a new value is supplied; an absent value is a
    /// no-op and the record comes back unchanged. `username` is never touched.
    pub fn update_message(
        &self,
        id: i64,
        content: Option<&str>,
    ) -> Result<MessageRow, StoreError> {
        self.with_conn(|conn| {
            let row = query_message_by_id(conn, id)?.ok_or(StoreError::NotFound)?;

            match content {
                Some(content) => {
                    conn.execute(
                        "UPDATE messages SET content = ?1 WHERE id = ?2",
                        (content, id),
                    )?;
                    Ok(MessageRow {
                        content: content.to_owned(),
                        ..row
                    })
                }
                None => Ok(row),
            }
        })
    }

    pub fn delete_message(&self, id: i64) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
            if deleted == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
    }
}

fn query_all_messages(conn: &Connection) -> Result<Vec<MessageRow>, StoreError> {
    // Stable order by primary key; the contract leaves order unspecified
    let mut stmt =
        conn.prepare("SELECT id, content, username FROM messages ORDER BY id ASC")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                content: row.get(1)?,
                username: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_message_by_id(conn: &Connection, id: i64) -> Result<Option<MessageRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, content, username FROM messages WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                content: row.get(1)?,
                username: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use crate::{Database, StoreError};

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let db = db();
        let first = db.insert_message("Hello 👋", "Liza").unwrap();
        let second = db.insert_message("Hi brother", "Duane").unwrap();

        assert_eq!(first.content, "Hello 👋");
        assert_eq!(first.username, "Liza");
        assert!(second.id > first.id);
    }

    #[test]
    fn list_returns_all_rows_in_id_order() {
        let db = db();
        db.insert_message("one", "Liza").unwrap();
        db.insert_message("two", "Duane").unwrap();

        let rows = db.list_messages().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].content, "one");
        assert_eq!(rows[1].content, "two");
    }

    #[test]
    fn get_finds_existing_and_misses_unknown() {
        let db = db();
        let row = db.insert_message("hello", "Liza").unwrap();

        let found = db.get_message(row.id).unwrap().unwrap();
        assert_eq!(found, row);
        assert!(db.get_message(row.id + 100).unwrap().is_none());
    }

    #[test]
    fn update_replaces_content_and_keeps_username() {
        let db = db();
        let row = db.insert_message("Hello", "Liza").unwrap();

        let updated = db.update_message(row.id, Some("Goodbye")).unwrap();
        assert_eq!(updated.id, row.id);
        assert_eq!(updated.content, "Goodbye");
        assert_eq!(updated.username, "Liza");
    }

    #[test]
    fn update_without_content_is_a_noop() {
        let db = db();
        let row = db.insert_message("Hello", "Liza").unwrap();

        let same = db.update_message(row.id, None).unwrap();
        assert_eq!(same, row);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let db = db();
        let err = db.update_message(42, Some("nope")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn delete_removes_row_permanently() {
        let db = db();
        let row = db.insert_message("bye", "Liza").unwrap();

        db.delete_message(row.id).unwrap();
        assert!(db.get_message(row.id).unwrap().is_none());
        assert!(matches!(
            db.delete_message(row.id).unwrap_err(),
            StoreError::NotFound
        ));
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let db = db();
        let first = db.insert_message("first", "Liza").unwrap();
        db.delete_message(first.id).unwrap();

        let next = db.insert_message("second", "Duane").unwrap();
        assert!(next.id > first.id);
    }

    #[test]
    fn empty_content_is_accepted() {
        // Presence is checked at the API; empty strings are valid values
        let db = db();
        let row = db.insert_message("", "Liza").unwrap();
        assert_eq!(row.content, "");
    }
}
