// ============================================================================
// EZRA Client - Document Retrieval
// File: crates/ezra-client/src/documents.rs
// ============================================================================
//! Resolves "view my lease" for the tenant portal.
//!
//! Retrieval ladder, first rung that applies wins:
//!   1. external viewer link (signed lease hosted by the signature provider)
//!   2. cached PDF bytes for this lease
//!   3. authenticated PDF download, cached for subsequent views
//!   4. plain link (usually the signing URL for an unsigned lease)
//!   5. nothing available

use bytes::Bytes;
use tracing::{info, instrument, warn};

use ezra_core::LeaseStatus;

use crate::error::ApiError;
use crate::leases::LeaseClient;
use crate::tenant::TenantLeaseStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewableDocument {
    /// Open this URL; no bytes pass through the client.
    Redirect { url: String },
    /// Raw PDF bytes fetched with the caller's credentials.
    Blob { content: Bytes },
    /// No document exists for this lease yet.
    Unavailable,
}

impl LeaseClient {
    /// Resolves the viewable document for a tenant's lease. Signed leases
    /// prefer the external viewer and fall back to the authenticated PDF;
    /// unsigned leases only ever yield their signing link.
    #[instrument(skip(self, status), fields(lease_id = status.lease_id))]
    pub async fn view_document(
        &self,
        status: &TenantLeaseStatus,
    ) -> Result<ViewableDocument, ApiError> {
        if status.status == LeaseStatus::Active {
            if let Some(url) = &status.documenso_view_url {
                info!("serving external viewer link");
                return Ok(ViewableDocument::Redirect { url: url.clone() });
            }
            if let Some(lease_id) = status.lease_id {
                if let Some(content) = self.cache.document(lease_id).await {
                    return Ok(ViewableDocument::Blob { content });
                }
                match self.download_document(lease_id).await {
                    Ok(content) => return Ok(ViewableDocument::Blob { content }),
                    // A signed lease whose PDF is not materialized yet falls
                    // through to the plain link.
                    Err(ApiError::NotFound(_)) => {
                        warn!(lease_id, "signed document not available yet")
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        match &status.url {
            Some(url) => Ok(ViewableDocument::Redirect { url: url.clone() }),
            None => Ok(ViewableDocument::Unavailable),
        }
    }

    async fn download_document(&self, lease_id: i64) -> Result<Bytes, ApiError> {
        let content = self.http.get_bytes(&format!("/tenant/leases/{lease_id}/document")).await?;
        info!(lease_id, bytes = content.len(), "downloaded lease document");
        self.cache.store_document(lease_id, content.clone()).await;
        Ok(content)
    }
}
