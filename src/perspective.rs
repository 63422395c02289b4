use crate::terraform::{FlatMap, FlatScope, FlatmapError};

/// Resource type this tool reconstructs; everything else in the state is
/// skipped.
pub const RESOURCE_TYPE: &str = "cloudhealth_perspective";

/// Default comparison operator for conditions. The config omits `op` when
/// it holds this value.
pub const DEFAULT_OP: &str = "=";

/// A `cloudhealth_perspective` resource as recorded in applied state.
///
/// `include_in_reports` stays the raw stored string; the state may carry
/// `"true"`/`"false"` or anything else, and it is reproduced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective {
    pub tf_name: String,
    pub name: String,
    pub include_in_reports: String,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub kind: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub asset: String,
    /// None when the state stores an empty string.
    pub combine_with: Option<String>,
    pub field: Vec<String>,
    pub tag_field: Vec<String>,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: Vec<String>,
    pub tag_field: Vec<String>,
    pub op: String,
    pub val: String,
}

impl Perspective {
    /// Decode a perspective from its flattened attribute map, walking
    /// `group.#` → `group.<i>.rule.#` → `group.<i>.rule.<j>.condition.#`
    /// in index order.
    pub fn from_attributes(tf_name: &str, attrs: &FlatMap) -> Result<Self, FlatmapError> {
        let root = attrs.root();
        let group_list = root.list("group")?;
        let mut groups = Vec::with_capacity(group_list.len());
        for i in 0..group_list.len() {
            groups.push(Group::decode(&group_list.scope(i))?);
        }

        Ok(Self {
            tf_name: tf_name.to_string(),
            name: root.get("name")?.to_string(),
            include_in_reports: root.get("include_in_reports")?.to_string(),
            groups,
        })
    }
}

impl Group {
    fn decode(scope: &FlatScope<'_>) -> Result<Self, FlatmapError> {
        let rule_list = scope.list("rule")?;
        let mut rules = Vec::with_capacity(rule_list.len());
        for i in 0..rule_list.len() {
            rules.push(Rule::decode(&rule_list.scope(i))?);
        }

        Ok(Self {
            name: scope.get("name")?.to_string(),
            kind: scope.get("type")?.to_string(),
            rules,
        })
    }
}

impl Rule {
    fn decode(scope: &FlatScope<'_>) -> Result<Self, FlatmapError> {
        let combine_with = match scope.get("combine_with")? {
            "" => None,
            value => Some(value.to_string()),
        };

        let condition_list = scope.list("condition")?;
        let mut conditions = Vec::with_capacity(condition_list.len());
        for i in 0..condition_list.len() {
            conditions.push(Condition::decode(&condition_list.scope(i))?);
        }

        Ok(Self {
            asset: scope.get("asset")?.to_string(),
            combine_with,
            field: string_list(scope, "field")?,
            tag_field: string_list(scope, "tag_field")?,
            conditions,
        })
    }
}

impl Condition {
    fn decode(scope: &FlatScope<'_>) -> Result<Self, FlatmapError> {
        Ok(Self {
            field: string_list(scope, "field")?,
            tag_field: string_list(scope, "tag_field")?,
            op: scope.get("op")?.to_string(),
            val: scope.get("val")?.to_string(),
        })
    }
}

fn string_list(scope: &FlatScope<'_>, field: &str) -> Result<Vec<String>, FlatmapError> {
    Ok(scope
        .list(field)?
        .values()?
        .into_iter()
        .map(str::to_string)
        .collect())
}
