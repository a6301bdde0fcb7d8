//! Asset records
//!
//! An [`Asset`] is one cost-accounting record for a priced resource or an
//! overhead bucket. Every asset carries the same [`AssetBase`]; the
//! kind-specific part lives in [`AssetDetail`], one variant per
//! [`AssetType`].
//!
//! ## Cost invariant
//!
//! `total_cost() == cost + adjustment + credit`. `discount` is stored and
//! carried but does not participate.

use crate::properties::{AssetLabels, AssetPricingModels, AssetProperties, Breakdown};
use crate::window::Window;
use chrono::{DateTime, Utc};
use std::fmt;

/// Kind of an asset
///
/// `Any` is the generic kind: it has no discriminator on the wire and is the
/// fallback for unknown discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetType {
    /// Generic asset, common fields only
    Any,
    /// Cloud-billed resource outside the cluster
    Cloud,
    /// Cluster-management overhead
    ClusterManagement,
    /// Persistent or local disk
    Disk,
    /// Load balancer
    LoadBalancer,
    /// Network egress/ingress
    Network,
    /// Compute node
    Node,
    /// Shared overhead
    Shared,
}

impl AssetType {
    /// All kinds, generic first
    pub const ALL: [AssetType; 8] = [
        AssetType::Any,
        AssetType::Cloud,
        AssetType::ClusterManagement,
        AssetType::Disk,
        AssetType::LoadBalancer,
        AssetType::Network,
        AssetType::Node,
        AssetType::Shared,
    ];

    /// Wire discriminator, `None` for the generic kind
    pub fn discriminator(&self) -> Option<&'static str> {
        match self {
            AssetType::Any => None,
            other => Some(other.as_str()),
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Any => "Asset",
            AssetType::Cloud => "Cloud",
            AssetType::ClusterManagement => "ClusterManagement",
            AssetType::Disk => "Disk",
            AssetType::LoadBalancer => "LoadBalancer",
            AssetType::Network => "Network",
            AssetType::Node => "Node",
            AssetType::Shared => "Shared",
        }
    }

    /// Resolve a wire discriminator
    ///
    /// Unrecognised strings, including the empty string and the generic
    /// display name, resolve to [`AssetType::Any`].
    pub fn from_discriminator(s: &str) -> Self {
        match s {
            "Cloud" => AssetType::Cloud,
            "ClusterManagement" => AssetType::ClusterManagement,
            "Disk" => AssetType::Disk,
            "LoadBalancer" => AssetType::LoadBalancer,
            "Network" => AssetType::Network,
            "Node" => AssetType::Node,
            "Shared" => AssetType::Shared,
            _ => AssetType::Any,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes common to every asset kind
#[derive(Debug, Clone, PartialEq)]
pub struct AssetBase {
    /// Descriptive properties
    pub properties: AssetProperties,
    /// Labels
    pub labels: AssetLabels,
    /// Pricing-model split, unset when the source had none
    pub pricing_models: Option<AssetPricingModels>,
    /// Interval the costs are attributed to
    pub window: Window,
    /// Manual or reconciliation adjustment
    pub adjustment: f64,
    /// Provider credit
    pub credit: f64,
    /// Discount, carried but outside the total-cost invariant
    pub discount: f64,
    /// Base cost before adjustment and credit
    pub cost: f64,
}

impl AssetBase {
    /// A zero-cost base over `window`
    pub fn new(window: Window) -> Self {
        Self {
            properties: AssetProperties::default(),
            labels: AssetLabels::new(),
            pricing_models: None,
            window,
            adjustment: 0.0,
            credit: 0.0,
            discount: 0.0,
            cost: 0.0,
        }
    }

    /// `cost + adjustment + credit`
    pub fn total_cost(&self) -> f64 {
        self.cost + self.adjustment + self.credit
    }
}

/// Extra attributes of a cloud asset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cloud {
    /// Billing usage type
    pub usage_type: String,
    /// Billing usage detail
    pub usage_detail: String,
}

/// Extra attributes of a disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disk {
    /// Accumulated byte-hours over the window
    pub byte_hours: f64,
    /// Storage class name
    pub storage_class: String,
    /// Usage split
    pub breakdown: Breakdown,
    /// Whether the disk is node-local
    ///
    /// In-memory only: it is never encoded, so a decoded disk always reports
    /// `false` here.
    pub local: bool,
}

/// Extra attributes of a compute node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Instance type
    pub node_type: String,
    /// Accumulated CPU core-hours
    pub cpu_core_hours: f64,
    /// Accumulated RAM byte-hours
    pub ram_byte_hours: f64,
    /// Accumulated GPU-hours
    pub gpu_hours: f64,
    /// CPU usage split
    pub cpu_breakdown: Breakdown,
    /// RAM usage split
    pub ram_breakdown: Breakdown,
    /// CPU share of cost
    pub cpu_cost: f64,
    /// GPU share of cost
    pub gpu_cost: f64,
    /// Attached GPUs
    pub gpu_count: f64,
    /// RAM share of cost
    pub ram_cost: f64,
}

/// Kind-specific part of an asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetDetail {
    /// Generic asset
    Any,
    /// Cloud asset
    Cloud(Cloud),
    /// Cluster-management overhead
    ClusterManagement,
    /// Disk
    Disk(Disk),
    /// Load balancer
    LoadBalancer,
    /// Network
    Network,
    /// Compute node
    Node(Node),
    /// Shared overhead
    Shared,
}

impl AssetDetail {
    /// Kind this detail belongs to
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetDetail::Any => AssetType::Any,
            AssetDetail::Cloud(_) => AssetType::Cloud,
            AssetDetail::ClusterManagement => AssetType::ClusterManagement,
            AssetDetail::Disk(_) => AssetType::Disk,
            AssetDetail::LoadBalancer => AssetType::LoadBalancer,
            AssetDetail::Network => AssetType::Network,
            AssetDetail::Node(_) => AssetType::Node,
            AssetDetail::Shared => AssetType::Shared,
        }
    }
}

/// One cost-accounting record
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Common attributes
    pub base: AssetBase,
    /// Kind-specific attributes
    pub detail: AssetDetail,
}

impl Asset {
    /// Assemble an asset
    pub fn new(base: AssetBase, detail: AssetDetail) -> Self {
        Self { base, detail }
    }

    /// Generic asset
    pub fn any(base: AssetBase) -> Self {
        Self::new(base, AssetDetail::Any)
    }

    /// Cloud asset
    pub fn cloud(base: AssetBase, cloud: Cloud) -> Self {
        Self::new(base, AssetDetail::Cloud(cloud))
    }

    /// Cluster-management asset
    pub fn cluster_management(base: AssetBase) -> Self {
        Self::new(base, AssetDetail::ClusterManagement)
    }

    /// Disk asset
    pub fn disk(base: AssetBase, disk: Disk) -> Self {
        Self::new(base, AssetDetail::Disk(disk))
    }

    /// Load-balancer asset
    pub fn load_balancer(base: AssetBase) -> Self {
        Self::new(base, AssetDetail::LoadBalancer)
    }

    /// Network asset
    pub fn network(base: AssetBase) -> Self {
        Self::new(base, AssetDetail::Network)
    }

    /// Node asset
    pub fn node(base: AssetBase, node: Node) -> Self {
        Self::new(base, AssetDetail::Node(node))
    }

    /// Shared-overhead asset
    pub fn shared(base: AssetBase) -> Self {
        Self::new(base, AssetDetail::Shared)
    }

    /// Kind of this asset
    pub fn asset_type(&self) -> AssetType {
        self.detail.asset_type()
    }

    /// Properties
    pub fn properties(&self) -> &AssetProperties {
        &self.base.properties
    }

    /// Labels
    pub fn labels(&self) -> &AssetLabels {
        &self.base.labels
    }

    /// Pricing models, if set
    pub fn pricing_models(&self) -> Option<&AssetPricingModels> {
        self.base.pricing_models.as_ref()
    }

    /// Cost window
    pub fn window(&self) -> &Window {
        &self.base.window
    }

    /// Window start
    pub fn start(&self) -> DateTime<Utc> {
        self.base.window.start()
    }

    /// Window end
    pub fn end(&self) -> DateTime<Utc> {
        self.base.window.end()
    }

    /// Window length in minutes
    pub fn minutes(&self) -> f64 {
        self.base.window.minutes()
    }

    /// Adjustment
    pub fn adjustment(&self) -> f64 {
        self.base.adjustment
    }

    /// Credit
    pub fn credit(&self) -> f64 {
        self.base.credit
    }

    /// Discount
    pub fn discount(&self) -> f64 {
        self.base.discount
    }

    /// Base cost
    pub fn cost(&self) -> f64 {
        self.base.cost
    }

    /// `cost + adjustment + credit`
    pub fn total_cost(&self) -> f64 {
        self.base.total_cost()
    }

    /// Disk detail, if this is a disk
    pub fn as_disk(&self) -> Option<&Disk> {
        match &self.detail {
            AssetDetail::Disk(d) => Some(d),
            _ => None,
        }
    }

    /// Node detail, if this is a node
    pub fn as_node(&self) -> Option<&Node> {
        match &self.detail {
            AssetDetail::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Cloud detail, if this is a cloud asset
    pub fn as_cloud(&self) -> Option<&Cloud> {
        match &self.detail {
            AssetDetail::Cloud(c) => Some(c),
            _ => None,
        }
    }

    /// Average provisioned bytes for a disk, 0 for other kinds
    pub fn bytes(&self) -> f64 {
        self.as_disk()
            .map(|d| self.base.window.per_hour(d.byte_hours))
            .unwrap_or(0.0)
    }

    /// Average CPU cores for a node, 0 for other kinds
    pub fn cpu_cores(&self) -> f64 {
        self.as_node()
            .map(|n| self.base.window.per_hour(n.cpu_core_hours))
            .unwrap_or(0.0)
    }

    /// Average RAM bytes for a node, 0 for other kinds
    pub fn ram_bytes(&self) -> f64 {
        self.as_node()
            .map(|n| self.base.window.per_hour(n.ram_byte_hours))
            .unwrap_or(0.0)
    }
}
