//! Repository layer for database operations.

use crate::domain::{NovoProcedimento, Procedimento};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row};

/// Repository for procedure records.
///
/// Every operation opens its own connection and closes it before returning.
/// Concurrent writers are serialized by SQLite's file locking.
pub struct Repository {
    options: SqliteConnectOptions,
}

impl Repository {
    /// Create a new repository that connects with the given options.
    pub fn new(options: SqliteConnectOptions) -> Self {
        Repository { options }
    }

    async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// List records, newest publication date first, ties broken by newest id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_procedimentos(
        &self,
        departamento: Option<&str>,
    ) -> Result<Vec<Procedimento>, sqlx::Error> {
        let mut conn = self.connect().await?;

        let result = match departamento {
            Some(departamento) => {
                sqlx::query(
                    r#"
                    SELECT id, departamento, codigo, data_publicacao, titulo, resumo, link
                    FROM procedimentos
                    WHERE departamento = ?
                    ORDER BY data_publicacao DESC, id DESC
                    "#,
                )
                .bind(departamento)
                .fetch_all(&mut conn)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, departamento, codigo, data_publicacao, titulo, resumo, link
                    FROM procedimentos
                    ORDER BY data_publicacao DESC, id DESC
                    "#,
                )
                .fetch_all(&mut conn)
                .await
            }
        };
        conn.close().await?;

        Ok(result?.iter().map(procedimento_from_row).collect())
    }

    /// Insert a record and read it back with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert or the read-back fails.
    pub async fn insert_procedimento(
        &self,
        novo: &NovoProcedimento,
    ) -> Result<Procedimento, sqlx::Error> {
        let mut conn = self.connect().await?;
        let result = insert_and_fetch(&mut conn, novo).await;
        conn.close().await?;
        result
    }

    /// Delete a record by id. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_procedimento(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM procedimentos WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await;
        conn.close().await?;

        Ok(result?.rows_affected() > 0)
    }
}

async fn insert_and_fetch(
    conn: &mut SqliteConnection,
    novo: &NovoProcedimento,
) -> Result<Procedimento, sqlx::Error> {
    let new_id = sqlx::query(
        r#"
        INSERT INTO procedimentos (departamento, codigo, data_publicacao, titulo, resumo, link)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(novo.departamento.as_str())
    .bind(&novo.codigo)
    .bind(&novo.data_publicacao)
    .bind(&novo.titulo)
    .bind(&novo.resumo)
    .bind(&novo.link)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    let row = sqlx::query(
        r#"
        SELECT id, departamento, codigo, data_publicacao, titulo, resumo, link
        FROM procedimentos
        WHERE id = ?
        "#,
    )
    .bind(new_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(procedimento_from_row(&row))
}

fn procedimento_from_row(row: &SqliteRow) -> Procedimento {
    Procedimento {
        id: row.get("id"),
        departamento: row.get("departamento"),
        codigo: row.get("codigo"),
        data_publicacao: row.get("data_publicacao"),
        titulo: row.get("titulo"),
        resumo: row.get("resumo"),
        link: row.get("link"),
    }
}
