//! Queue and package operations.

use pyload_core::{FileId, Package, PackageId, RpcResult};
use std::collections::BTreeMap;

use super::RpcClient;
use crate::error::ClientError;
use crate::http::HttpBackend;
use crate::request::RpcRequest;

impl<B: HttpBackend> RpcClient<B> {
    pub async fn get_queue(&self) -> RpcResult<Vec<Package>> {
        self.invoke_as(RpcRequest::new("get_queue")).await
    }

    /// Queue and collector packages; each carries its `queue` flag.
    pub async fn get_queue_and_collector(&self) -> RpcResult<Vec<Package>> {
        self.invoke_as(RpcRequest::new("get_queue_and_collector"))
            .await
    }

    pub async fn get_package_data(&self, id: PackageId) -> RpcResult<Package> {
        self.invoke_as(RpcRequest::new("get_package_data").arg(id))
            .await
    }

    /// Create a package and return its id.
    pub async fn add_package(
        &self,
        name: &str,
        links: &[String],
        password: Option<&str>,
    ) -> RpcResult<PackageId> {
        let mut request = RpcRequest::new("add_package")
            .kwarg("name", name)
            .kwarg("links", links);
        if let Some(password) = password {
            request = request.kwarg("password", password);
        }
        self.invoke_as(request).await
    }

    /// Remove links. An empty id list is rejected without a request.
    pub async fn delete_files(&self, ids: &[FileId]) -> RpcResult<()> {
        if ids.is_empty() {
            return Err(ClientError::invalid_request("no file ids given").into());
        }
        self.invoke_unit(RpcRequest::new("delete_files").try_kwarg("file_ids", ids))
            .await
    }

    /// Remove unfinished links; returns how many were removed.
    pub async fn delete_unfinished_links(&self, package_ids: &[PackageId]) -> RpcResult<u64> {
        let removed: Option<u64> = self
            .invoke_as(RpcRequest::new("delete_unfinished_links").try_kwarg("package_ids", package_ids))
            .await?;
        Ok(removed.unwrap_or(0))
    }

    pub async fn set_package_data(
        &self,
        id: PackageId,
        data: &BTreeMap<String, String>,
    ) -> RpcResult<()> {
        self.invoke_unit(
            RpcRequest::new("set_package_data")
                .kwarg("package_id", id.0)
                .try_kwarg("data", data),
        )
        .await
    }
}
