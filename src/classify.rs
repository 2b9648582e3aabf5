//! Pure classification of SDK methods into Terraform artifacts.
//!
//! Two independent passes over the method list:
//!
//! - the datasource pass picks up `List*` and `Get*ById` methods in input
//!   order;
//! - the resource pass groups methods by receiver (first-seen order) and
//!   emits one CRUD resource per receiver that has at least one of
//!   Create/Update/Delete, plus one action resource per method that is
//!   none of Get/List/Create/Update/Delete.
//!
//! A `Get*ById` method feeds both passes: it is a datasource in its own
//! right and fills the `read` slot of its receiver's CRUD resource. That
//! dual membership mirrors the provider layout, where the same API call
//! backs a lookup datasource and a resource's refresh.
//!
//! No I/O, no failure modes: unrecognized or degenerate names are skipped.

use std::collections::HashMap;

use crate::sdk::ApiMethod;

/// A read-only query artifact: single-item lookup or list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datasource {
    /// The originating method name, e.g. `GetAlertById`.
    pub name: String,
    /// Method name with the query verb stripped, e.g. `Alert`.
    pub resource_name: String,
    pub receiver: String,
}

/// A manageable entity artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Lifecycle resource assembled from a receiver's CRUD verbs. Slots are
    /// filled from whatever methods exist; a receiver with create + delete
    /// but no update is fine.
    Crud {
        name: String,
        receiver: String,
        create: Option<String>,
        read: Option<String>,
        update: Option<String>,
        delete: Option<String>,
    },
    /// One non-CRUD, non-query method treated as its own manageable action.
    Action {
        name: String,
        receiver: String,
        method: String,
    },
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Crud { name, .. } | Resource::Action { name, .. } => name,
        }
    }

    pub fn receiver(&self) -> &str {
        match self {
            Resource::Crud { receiver, .. } | Resource::Action { receiver, .. } => receiver,
        }
    }
}

/// Aggregate classifier output. Datasources follow input order; resources
/// follow first-seen receiver order, CRUD resource before that receiver's
/// action resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub datasources: Vec<Datasource>,
    pub resources: Vec<Resource>,
}

/// Role a method plays on its receiver, decided purely from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRole {
    Create,
    Update,
    Delete,
    /// `Get*ById`: backs the CRUD `read` slot and a lookup datasource.
    Read,
    /// `List*` or any other `Get*`: datasource territory, never a resource.
    Query,
    Other,
}

/// Classify a method name into exactly one role. Rules are checked in
/// priority order; `Create*` wins even if the name also ends in `ById`.
pub fn method_role(name: &str) -> MethodRole {
    if name.starts_with("Create") {
        MethodRole::Create
    } else if name.starts_with("Update") {
        MethodRole::Update
    } else if name.starts_with("Delete") {
        MethodRole::Delete
    } else if name.starts_with("Get") && name.ends_with("ById") {
        MethodRole::Read
    } else if name.starts_with("Get") || name.starts_with("List") {
        MethodRole::Query
    } else {
        MethodRole::Other
    }
}

/// Run both passes over the method list.
///
/// Deterministic and total: the same input always yields the same,
/// order-equal output.
pub fn classify(methods: &[ApiMethod]) -> Classification {
    Classification {
        datasources: extract_datasources(methods),
        resources: extract_resources(methods),
    }
}

fn extract_datasources(methods: &[ApiMethod]) -> Vec<Datasource> {
    let mut datasources = Vec::new();

    for method in methods {
        if let Some(rest) = method.name.strip_prefix("List") {
            datasources.push(Datasource {
                name: method.name.clone(),
                resource_name: rest.to_string(),
                receiver: method.receiver.clone(),
            });
        }
        if let Some(rest) = method
            .name
            .strip_prefix("Get")
            .and_then(|r| r.strip_suffix("ById"))
        {
            datasources.push(Datasource {
                name: method.name.clone(),
                resource_name: rest.to_string(),
                receiver: method.receiver.clone(),
            });
        }
    }

    datasources
}

/// Per-receiver accumulator for the resource pass.
#[derive(Debug, Default)]
struct ReceiverSlots {
    create: Option<String>,
    read: Option<String>,
    update: Option<String>,
    delete: Option<String>,
    others: Vec<String>,
}

impl ReceiverSlots {
    fn record(&mut self, name: &str) {
        match method_role(name) {
            MethodRole::Create => self.create = Some(name.to_string()),
            MethodRole::Update => self.update = Some(name.to_string()),
            MethodRole::Delete => self.delete = Some(name.to_string()),
            MethodRole::Read => self.read = Some(name.to_string()),
            MethodRole::Query => {}
            MethodRole::Other => self.others.push(name.to_string()),
        }
    }

    fn has_crud(&self) -> bool {
        self.create.is_some() || self.update.is_some() || self.delete.is_some()
    }

    /// Entity name derived from the CRUD verbs, create > update > delete.
    /// All three prefixes are the same length, so stripping is uniform; a
    /// name that is nothing but the bare verb yields None.
    fn crud_name(&self) -> Option<String> {
        let stripped = if let Some(create) = &self.create {
            create.strip_prefix("Create")
        } else if let Some(update) = &self.update {
            update.strip_prefix("Update")
        } else {
            self.delete.as_deref().and_then(|d| d.strip_prefix("Delete"))
        }?;

        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_string())
        }
    }
}

/// Group methods by receiver, preserving the order receivers first appear.
/// The empty receiver string is a grouping key like any other.
fn group_by_receiver(methods: &[ApiMethod]) -> Vec<(String, ReceiverSlots)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, ReceiverSlots)> = Vec::new();

    for method in methods {
        let i = *index.entry(method.receiver.clone()).or_insert_with(|| {
            groups.push((method.receiver.clone(), ReceiverSlots::default()));
            groups.len() - 1
        });
        groups[i].1.record(&method.name);
    }

    groups
}

fn extract_resources(methods: &[ApiMethod]) -> Vec<Resource> {
    let mut resources = Vec::new();

    for (receiver, slots) in group_by_receiver(methods) {
        if slots.has_crud() {
            // No derivable entity name means no CRUD resource; the
            // receiver's action methods below are unaffected.
            if let Some(name) = slots.crud_name() {
                resources.push(Resource::Crud {
                    name,
                    receiver: receiver.clone(),
                    create: slots.create.clone(),
                    read: slots.read.clone(),
                    update: slots.update.clone(),
                    delete: slots.delete.clone(),
                });
            }
        }

        for method in &slots.others {
            resources.push(Resource::Action {
                name: method.clone(),
                receiver: receiver.clone(),
                method: method.clone(),
            });
        }
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods(pairs: &[(&str, &str)]) -> Vec<ApiMethod> {
        pairs
            .iter()
            .map(|(name, receiver)| ApiMethod::new(*name, *receiver))
            .collect()
    }

    #[test]
    fn list_method_becomes_datasource() {
        let result = classify(&methods(&[("ListAlerts", "AlertApi")]));

        assert_eq!(
            result.datasources,
            vec![Datasource {
                name: "ListAlerts".to_string(),
                resource_name: "Alerts".to_string(),
                receiver: "AlertApi".to_string(),
            }]
        );
        assert!(result.resources.is_empty());
    }

    #[test]
    fn get_by_id_only_receiver_yields_datasource_and_no_resource() {
        let result = classify(&methods(&[("GetAlertById", "AlertApi")]));

        assert_eq!(
            result.datasources,
            vec![Datasource {
                name: "GetAlertById".to_string(),
                resource_name: "Alert".to_string(),
                receiver: "AlertApi".to_string(),
            }]
        );
        assert!(result.resources.is_empty());
    }

    #[test]
    fn create_only_receiver_yields_partial_crud_resource() {
        let result = classify(&methods(&[("CreateWidget", "WidgetApi")]));

        assert!(result.datasources.is_empty());
        assert_eq!(
            result.resources,
            vec![Resource::Crud {
                name: "Widget".to_string(),
                receiver: "WidgetApi".to_string(),
                create: Some("CreateWidget".to_string()),
                read: None,
                update: None,
                delete: None,
            }]
        );
    }

    #[test]
    fn full_crud_receiver_fills_all_slots_and_read_is_dual_use() {
        let result = classify(&methods(&[
            ("CreateWidget", "WidgetApi"),
            ("GetWidgetById", "WidgetApi"),
            ("UpdateWidget", "WidgetApi"),
            ("DeleteWidget", "WidgetApi"),
        ]));

        // GetWidgetById shows up as a datasource...
        assert_eq!(
            result.datasources,
            vec![Datasource {
                name: "GetWidgetById".to_string(),
                resource_name: "Widget".to_string(),
                receiver: "WidgetApi".to_string(),
            }]
        );
        // ...and as the read slot of the CRUD resource.
        assert_eq!(
            result.resources,
            vec![Resource::Crud {
                name: "Widget".to_string(),
                receiver: "WidgetApi".to_string(),
                create: Some("CreateWidget".to_string()),
                read: Some("GetWidgetById".to_string()),
                update: Some("UpdateWidget".to_string()),
                delete: Some("DeleteWidget".to_string()),
            }]
        );
    }

    #[test]
    fn create_takes_naming_priority_over_update() {
        let result = classify(&methods(&[
            ("UpdateGadget", "MixedApi"),
            ("CreateWidget", "MixedApi"),
        ]));

        assert_eq!(result.resources.len(), 1);
        assert_eq!(result.resources[0].name(), "Widget");
    }

    #[test]
    fn delete_names_the_resource_when_alone() {
        let result = classify(&methods(&[("DeleteSnapshot", "SnapshotApi")]));

        assert_eq!(
            result.resources,
            vec![Resource::Crud {
                name: "Snapshot".to_string(),
                receiver: "SnapshotApi".to_string(),
                create: None,
                read: None,
                update: None,
                delete: Some("DeleteSnapshot".to_string()),
            }]
        );
    }

    #[test]
    fn non_crud_method_becomes_action_resource() {
        let result = classify(&methods(&[("RotateCredentials", "CredsApi")]));

        assert!(result.datasources.is_empty());
        assert_eq!(
            result.resources,
            vec![Resource::Action {
                name: "RotateCredentials".to_string(),
                receiver: "CredsApi".to_string(),
                method: "RotateCredentials".to_string(),
            }]
        );
    }

    #[test]
    fn action_resources_coexist_with_crud_on_one_receiver() {
        let result = classify(&methods(&[
            ("CreateCluster", "ClusterApi"),
            ("ExpandCluster", "ClusterApi"),
            ("DeleteCluster", "ClusterApi"),
        ]));

        assert_eq!(result.resources.len(), 2);
        assert!(matches!(
            &result.resources[0],
            Resource::Crud { name, .. } if name == "Cluster"
        ));
        assert!(matches!(
            &result.resources[1],
            Resource::Action { method, .. } if method == "ExpandCluster"
        ));
    }

    #[test]
    fn receivers_keep_first_seen_order() {
        let result = classify(&methods(&[
            ("CreateSubnet", "SubnetApi"),
            ("CreateVpc", "VpcApi"),
            ("DeleteSubnet", "SubnetApi"),
        ]));

        let receivers: Vec<&str> = result.resources.iter().map(|r| r.receiver()).collect();
        assert_eq!(receivers, vec!["SubnetApi", "VpcApi"]);
        assert_eq!(result.resources[0].name(), "Subnet");
    }

    #[test]
    fn methods_never_leak_across_receivers() {
        let result = classify(&methods(&[
            ("CreateSubnet", "SubnetApi"),
            ("UpdateVpc", "VpcApi"),
        ]));

        assert_eq!(
            result.resources,
            vec![
                Resource::Crud {
                    name: "Subnet".to_string(),
                    receiver: "SubnetApi".to_string(),
                    create: Some("CreateSubnet".to_string()),
                    read: None,
                    update: None,
                    delete: None,
                },
                Resource::Crud {
                    name: "Vpc".to_string(),
                    receiver: "VpcApi".to_string(),
                    create: None,
                    read: None,
                    update: Some("UpdateVpc".to_string()),
                    delete: None,
                },
            ]
        );
    }

    #[test]
    fn empty_receiver_is_a_valid_group() {
        let result = classify(&methods(&[("CreateThing", ""), ("DeleteThing", "")]));

        assert_eq!(result.resources.len(), 1);
        assert_eq!(result.resources[0].receiver(), "");
        assert_eq!(result.resources[0].name(), "Thing");
    }

    #[test]
    fn bare_verb_method_is_skipped_silently() {
        // A method literally named "Create" strips to nothing; no CRUD
        // resource is produced, but sibling action methods still are.
        let result = classify(&methods(&[("Create", "OddApi"), ("Reboot", "OddApi")]));

        assert_eq!(
            result.resources,
            vec![Resource::Action {
                name: "Reboot".to_string(),
                receiver: "OddApi".to_string(),
                method: "Reboot".to_string(),
            }]
        );
    }

    #[test]
    fn later_method_wins_a_contested_slot() {
        let result = classify(&methods(&[
            ("CreateWidget", "WidgetApi"),
            ("CreateWidgetBatch", "WidgetApi"),
        ]));

        assert_eq!(
            result.resources,
            vec![Resource::Crud {
                name: "WidgetBatch".to_string(),
                receiver: "WidgetApi".to_string(),
                create: Some("CreateWidgetBatch".to_string()),
                read: None,
                update: None,
                delete: None,
            }]
        );
    }

    #[test]
    fn plain_get_is_neither_datasource_nor_resource() {
        let result = classify(&methods(&[("GetStats", "StatsApi")]));

        assert!(result.datasources.is_empty());
        assert!(result.resources.is_empty());
    }

    #[test]
    fn classification_is_idempotent() {
        let input = methods(&[
            ("ListClusters", "ClusterApi"),
            ("CreateCluster", "ClusterApi"),
            ("GetClusterById", "ClusterApi"),
            ("RenameCluster", "ClusterApi"),
            ("GetAlertById", "AlertApi"),
        ]);

        let first = classify(&input);
        let second = classify(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn method_role_priority_order() {
        assert_eq!(method_role("CreateVm"), MethodRole::Create);
        assert_eq!(method_role("UpdateVm"), MethodRole::Update);
        assert_eq!(method_role("DeleteVm"), MethodRole::Delete);
        assert_eq!(method_role("GetVmById"), MethodRole::Read);
        assert_eq!(method_role("GetVmStats"), MethodRole::Query);
        assert_eq!(method_role("ListVms"), MethodRole::Query);
        assert_eq!(method_role("PowerOnVm"), MethodRole::Other);
        // Create wins even when the name also ends in ById.
        assert_eq!(method_role("CreateVmById"), MethodRole::Create);
    }
}
