/// Region identifiers offered for new clusters.
pub const PRODUCTION_REGIONS: &[&str] = &[
    "australiaeast",
    "australiasoutheast",
    "canadacentral",
    "canadaeast",
    "centralindia",
    "centralus",
    "eastasia",
    "eastus",
    "eastus2",
    "francecentral",
    "japaneast",
    "japanwest",
    "koreacentral",
    "koreasouth",
    "northcentralus",
    "northeurope",
    "southcentralus",
    "southeastasia",
    "southindia",
    "uksouth",
    "ukwest",
    "westcentralus",
    "westeurope",
    "westus",
    "westus2",
];

/// Region identifiers offered as preview. Currently none.
pub const PREVIEW_REGIONS: &[&str] = &[];

/// Which region identifiers are offered, split by availability tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    pub production: Vec<String>,
    pub preview: Vec<String>,
}

impl RegionCatalog {
    pub fn new<P, Q>(production: P, preview: Q) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        Self {
            production: production.into_iter().map(Into::into).collect(),
            preview: preview.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::new(
            PRODUCTION_REGIONS.iter().copied(),
            PREVIEW_REGIONS.iter().copied(),
        )
    }
}
