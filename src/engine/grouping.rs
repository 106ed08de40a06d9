use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::{Client, Supplier};

use super::balance::{client_balance, clients_balance, Balance};

/// Per-supplier sold/paid/pending totals over all of that supplier's
/// clients, for dashboard display.
#[derive(Debug, Clone)]
pub struct SupplierSummary<'a> {
    pub supplier: &'a Supplier,
    pub balance: Balance,
}

/// One partition of the client list, keyed by supplier reference.
///
/// `supplier` is `None` when the referenced supplier record is absent; such
/// clients form a first-class "unknown supplier" group instead of being
/// dropped or treated as an error.
#[derive(Debug, Clone)]
pub struct ClientGroup<'a> {
    pub supplier: Option<&'a Supplier>,
    pub clients: Vec<&'a Client>,
    pub total_pending: Decimal,
}

/// Summaries for every supplier, ordered by descending pending balance.
///
/// A supplier with zero clients still appears, with an all-zero balance.
/// Ties are broken by case-insensitive supplier name.
pub fn supplier_summaries<'a>(
    suppliers: &'a [Supplier],
    clients: &'a [Client],
) -> Vec<SupplierSummary<'a>> {
    let mut summaries: Vec<SupplierSummary<'a>> = suppliers
        .iter()
        .map(|supplier| SupplierSummary {
            supplier,
            balance: clients_balance(
                clients
                    .iter()
                    .filter(|client| client.supplier_id == supplier.id),
            ),
        })
        .collect();
    summaries.sort_by(|a, b| {
        b.balance
            .pending()
            .cmp(&a.balance.pending())
            .then_with(|| name_key(&a.supplier.name).cmp(&name_key(&b.supplier.name)))
    });
    summaries
}

/// Partitions clients by supplier reference, ordered by descending group
/// pending balance.
///
/// `name_filter` is a case-insensitive substring match against client names;
/// an empty filter keeps every client. Groups whose supplier record is
/// missing are preserved under `supplier: None`. On equal pending, named
/// groups order before unknown ones and among themselves by name.
pub fn group_clients_by_supplier<'a>(
    clients: &'a [Client],
    suppliers: &'a [Supplier],
    name_filter: &str,
) -> Vec<ClientGroup<'a>> {
    let needle = name_filter.trim().to_lowercase();
    let filtered = clients
        .iter()
        .filter(|client| needle.is_empty() || client.name.to_lowercase().contains(&needle));

    // Partition in first-seen order so equal-pending groups stay stable.
    let mut order: Vec<Uuid> = Vec::new();
    let mut members: HashMap<Uuid, Vec<&'a Client>> = HashMap::new();
    for client in filtered {
        members
            .entry(client.supplier_id)
            .or_insert_with(|| {
                order.push(client.supplier_id);
                Vec::new()
            })
            .push(client);
    }

    let mut groups: Vec<ClientGroup<'a>> = order
        .into_iter()
        .map(|supplier_id| {
            let group_clients = members.remove(&supplier_id).unwrap_or_default();
            let total_pending = group_clients
                .iter()
                .map(|client| client_balance(client).pending())
                .sum();
            ClientGroup {
                supplier: suppliers.iter().find(|s| s.id == supplier_id),
                clients: group_clients,
                total_pending,
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        b.total_pending
            .cmp(&a.total_pending)
            .then_with(|| match (a.supplier, b.supplier) {
                (Some(left), Some(right)) => name_key(&left.name).cmp(&name_key(&right.name)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
    groups
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Transaction, TransactionKind};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn client_with_pending(name: &str, supplier_id: Uuid, pending: Decimal) -> Client {
        let mut client = Client::new(name, supplier_id);
        if pending > Decimal::ZERO {
            client.record(Transaction::new(TransactionKind::Sale, pending, Utc::now()));
        }
        client
    }

    #[test]
    fn summaries_sorted_by_descending_pending() {
        let supplier_a = Supplier::new("Distribuidora A");
        let supplier_b = Supplier::new("Distribuidora B");
        let clients = vec![
            client_with_pending("C1", supplier_a.id, dec!(300)),
            client_with_pending("C2", supplier_a.id, Decimal::ZERO),
            client_with_pending("C3", supplier_b.id, dec!(50)),
        ];
        let suppliers = vec![supplier_b.clone(), supplier_a.clone()];

        let summaries = supplier_summaries(&suppliers, &clients);
        assert_eq!(summaries[0].supplier.id, supplier_a.id);
        assert_eq!(summaries[0].balance.pending(), dec!(300));
        assert_eq!(summaries[1].supplier.id, supplier_b.id);
        assert_eq!(summaries[1].balance.pending(), dec!(50));
    }

    #[test]
    fn supplier_without_clients_appears_with_zero_summary() {
        let supplier = Supplier::new("Sin Clientes");
        let summaries = supplier_summaries(std::slice::from_ref(&supplier), &[]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].balance.pending(), Decimal::ZERO);
    }

    #[test]
    fn equal_pending_breaks_ties_by_name() {
        let zulu = Supplier::new("Zulu");
        let alfa = Supplier::new("alfa");
        let suppliers = [zulu.clone(), alfa.clone()];
        let summaries = supplier_summaries(&suppliers, &[]);
        assert_eq!(summaries[0].supplier.id, alfa.id);
        assert_eq!(summaries[1].supplier.id, zulu.id);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let supplier = Supplier::new("Central");
        let clients = vec![
            client_with_pending("Juan", supplier.id, dec!(10)),
            client_with_pending("Julia", supplier.id, dec!(20)),
            client_with_pending("Pedro", supplier.id, dec!(30)),
        ];

        let groups = group_clients_by_supplier(&clients, std::slice::from_ref(&supplier), "ju");
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Juan", "Julia"]);
        assert_eq!(groups[0].total_pending, dec!(30));
    }

    #[test]
    fn dangling_supplier_reference_forms_unknown_group() {
        let supplier = Supplier::new("Known");
        let orphan = client_with_pending("Orphan", Uuid::new_v4(), dec!(5));
        let owned = client_with_pending("Owned", supplier.id, dec!(100));
        let clients = vec![orphan, owned];

        let groups = group_clients_by_supplier(&clients, std::slice::from_ref(&supplier), "");
        assert_eq!(groups.len(), 2);
        assert!(groups[0].supplier.is_some());
        assert!(groups[1].supplier.is_none());
        assert_eq!(groups[1].total_pending, dec!(5));
    }

    #[test]
    fn grouping_is_permutation_independent() {
        let supplier_a = Supplier::new("A");
        let supplier_b = Supplier::new("B");
        let suppliers = vec![supplier_a.clone(), supplier_b.clone()];
        let clients = vec![
            client_with_pending("C1", supplier_a.id, dec!(10)),
            client_with_pending("C2", supplier_b.id, dec!(70)),
            client_with_pending("C3", supplier_a.id, dec!(25)),
        ];
        let mut reversed_clients = clients.clone();
        reversed_clients.reverse();

        let forward = group_clients_by_supplier(&clients, &suppliers, "");
        let reversed = group_clients_by_supplier(&reversed_clients, &suppliers, "");

        let forward_keys: Vec<(Option<Uuid>, Decimal)> = forward
            .iter()
            .map(|g| (g.supplier.map(|s| s.id), g.total_pending))
            .collect();
        let reversed_keys: Vec<(Option<Uuid>, Decimal)> = reversed
            .iter()
            .map(|g| (g.supplier.map(|s| s.id), g.total_pending))
            .collect();
        assert_eq!(forward_keys, reversed_keys);
    }

    #[test]
    fn empty_client_set_yields_empty_group_list() {
        let supplier = Supplier::new("Lonely");
        let groups = group_clients_by_supplier(&[], std::slice::from_ref(&supplier), "");
        assert!(groups.is_empty());
    }
}
