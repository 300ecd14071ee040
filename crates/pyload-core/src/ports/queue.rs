//! Queue and package port.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::error::RpcResult;
use crate::domain::{FileId, Package, PackageId};

/// Port trait for reading and mutating the download queue.
///
/// Mutations never touch local state; callers re-read from the server
/// afterwards if they need a fresh view.
#[async_trait]
pub trait QueuePort: Send + Sync {
    /// Packages in the download queue.
    async fn get_queue(&self) -> RpcResult<Vec<Package>>;

    /// Packages from both queue and collector, tagged with the `queue` flag.
    async fn get_queue_and_collector(&self) -> RpcResult<Vec<Package>>;

    /// A single package including its links.
    async fn get_package_data(&self, id: PackageId) -> RpcResult<Package>;

    /// Create a package from `links`; returns the new package id.
    async fn add_package(
        &self,
        name: &str,
        links: &[String],
        password: Option<&str>,
    ) -> RpcResult<PackageId>;

    /// Remove links by file id.
    async fn delete_files(&self, ids: &[FileId]) -> RpcResult<()>;

    /// Remove every unfinished link of the given packages; returns the count removed.
    async fn delete_unfinished_links(&self, package_ids: &[PackageId]) -> RpcResult<u64>;

    /// Update package properties (`name`, `folder`, `password`, ...).
    async fn set_package_data(
        &self,
        id: PackageId,
        data: &BTreeMap<String, String>,
    ) -> RpcResult<()>;
}
