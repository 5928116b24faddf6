use super::dto::Buyer;
use crate::modules::common::store_error::StoreError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct BuyerTable {
    last_id: i32,

    /// id -> buyer
    rows: BTreeMap<i32, Buyer>,
}

/// In process buyer store, cloning it yields a handle to the same buyers.
#[derive(Clone, Default)]
pub struct BuyerRepository {
    table: Arc<RwLock<BuyerTable>>,
}

pub fn new_buyer_repository() -> BuyerRepository {
    BuyerRepository::default()
}

impl BuyerRepository {
    /// stores a new buyer, emails are unique ignoring case
    pub async fn create_buyer(&self, mut buyer: Buyer) -> Result<Buyer, StoreError> {
        let mut table = self.table.write().await;

        let in_use = table
            .rows
            .values()
            .any(|b| b.email.eq_ignore_ascii_case(&buyer.email));

        if in_use {
            return Err(StoreError::UniqueViolation { column: "email" });
        }

        table.last_id += 1;
        buyer.id = table.last_id;
        table.rows.insert(buyer.id, buyer.clone());

        Ok(buyer)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Buyer, StoreError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// every buyer, ordered by name
    pub async fn list_buyers(&self) -> Vec<Buyer> {
        let mut buyers: Vec<Buyer> = self.table.read().await.rows.values().cloned().collect();

        buyers.sort_by_key(|b| b.full_name.to_lowercase());
        buyers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buyer(full_name: &str, email: &str) -> Buyer {
        Buyer {
            id: 0,
            full_name: full_name.to_string(),
            phone: String::from("912345678"),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_ids_and_finds_buyers() {
        let repo = new_buyer_repository();

        let joana = repo.create_buyer(buyer("Joana", "joana@frota.pt")).await.unwrap();
        let rui = repo.create_buyer(buyer("Rui", "rui@frota.pt")).await.unwrap();

        assert_eq!((joana.id, rui.id), (1, 2));
        assert_eq!(repo.find_by_id(2).await.unwrap().full_name, "Rui");
        assert_eq!(repo.find_by_id(3).await.unwrap_err(), StoreError::NotFound);
        assert_eq!(repo.find_by_id(1).await.unwrap(), joana);
    }

    #[tokio::test]
    async fn rejects_emails_in_use() {
        let repo = new_buyer_repository();
        repo.create_buyer(buyer("Joana", "joana@frota.pt")).await.unwrap();

        let err = repo
            .create_buyer(buyer("Outra Joana", "Joana@Frota.pt"))
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::UniqueViolation { column: "email" });
    }

    #[tokio::test]
    async fn lists_buyers_by_name() {
        let repo = new_buyer_repository();
        repo.create_buyer(buyer("rui", "rui@frota.pt")).await.unwrap();
        repo.create_buyer(buyer("Ana", "ana@frota.pt")).await.unwrap();

        let names: Vec<_> = repo
            .list_buyers()
            .await
            .into_iter()
            .map(|b| b.full_name)
            .collect();

        assert_eq!(names, vec!["Ana", "rui"]);
    }
}
