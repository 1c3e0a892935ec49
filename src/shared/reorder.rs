use std::future::Future;

use futures::future::join_all;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::error::RepositoryError;

/// One entry of a bulk `PUT …/reorder` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReorderItem {
    pub id: Uuid,
    pub order: i32,
}

/// Runs every order update concurrently. All updates are attempted; the
/// first failure in input order is returned.
pub async fn apply_reorder<F, Fut>(
    items: Vec<ReorderItem>,
    set_order: F,
) -> Result<(), RepositoryError>
where
    F: Fn(ReorderItem) -> Fut,
    Fut: Future<Output = Result<(), RepositoryError>>,
{
    join_all(items.into_iter().map(set_order))
        .await
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn attempts_every_item_and_reports_first_failure() {
        let seen = Mutex::new(Vec::new());
        let failing = Uuid::new_v4();
        let items = vec![
            ReorderItem { id: Uuid::new_v4(), order: 0 },
            ReorderItem { id: failing, order: 1 },
            ReorderItem { id: Uuid::new_v4(), order: 2 },
        ];

        let result = apply_reorder(items, |item| {
            seen.lock().unwrap().push(item.order);
            async move {
                if item.id == failing {
                    Err(RepositoryError::NotFound)
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(result, Err(RepositoryError::NotFound));
        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn parses_wire_shape() {
        let id = Uuid::new_v4();
        let items: Vec<ReorderItem> =
            serde_json::from_value(serde_json::json!([{ "id": id, "order": 4 }])).unwrap();
        assert_eq!(items, vec![ReorderItem { id, order: 4 }]);
    }
}
