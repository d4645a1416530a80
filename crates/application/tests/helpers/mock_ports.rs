#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_nscheck_application::ports::{NameResolver, NameserverClient, ResolvedRecord};
use ferrous_nscheck_domain::{DnsQuery, DomainError, EndpointReport, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

type ResolveKey = (String, RecordType);

#[derive(Clone)]
pub struct MockNameResolver {
    responses: Arc<RwLock<HashMap<ResolveKey, Vec<ResolvedRecord>>>>,
    error_responses: Arc<RwLock<HashMap<ResolveKey, DomainError>>>,
    calls: Arc<Mutex<Vec<ResolveKey>>>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            error_responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_response(&self, name: &str, record_type: RecordType, records: Vec<ResolvedRecord>) {
        self.responses
            .write()
            .await
            .insert((name.to_string(), record_type), records);
    }

    pub async fn set_nameservers(&self, zone: &str, nameservers: &[&str]) {
        let records = nameservers
            .iter()
            .map(|ns| ResolvedRecord::new("NS", *ns))
            .collect();
        self.set_response(zone, RecordType::NS, records).await;
    }

    pub async fn set_addresses(&self, nameserver: &str, ips: &[&str]) {
        let records = ips.iter().map(|ip| ResolvedRecord::new("A", *ip)).collect();
        self.set_response(nameserver, RecordType::A, records).await;
    }

    pub async fn set_response_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.error_responses
            .write()
            .await
            .insert((name.to_string(), record_type), error);
    }

    pub fn calls(&self) -> Vec<ResolveKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_names(&self, record_type: RecordType) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, rt)| *rt == record_type)
            .map(|(name, _)| name)
            .collect()
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedRecord>, DomainError> {
        let key = (query.domain.to_string(), query.record_type);
        self.calls.lock().unwrap().push(key.clone());

        if let Some(error) = self.error_responses.read().await.get(&key) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Clone)]
pub struct MockNameserverClient {
    responses: Arc<RwLock<HashMap<IpAddr, EndpointReport>>>,
    error_responses: Arc<RwLock<HashMap<IpAddr, DomainError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<Mutex<Vec<(IpAddr, DnsQuery)>>>,
}

impl MockNameserverClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            error_responses: Arc::new(RwLock::new(HashMap::new())),
            delay: Arc::new(RwLock::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_response(&self, ip: &str, report: EndpointReport) {
        self.responses
            .write()
            .await
            .insert(ip.parse().unwrap(), report);
    }

    pub async fn set_response_error(&self, ip: &str, error: DomainError) {
        self.error_responses
            .write()
            .await
            .insert(ip.parse().unwrap(), error);
    }

    /// Every query sleeps this long before answering.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn calls(&self) -> Vec<(IpAddr, DnsQuery)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_ips(&self) -> Vec<IpAddr> {
        self.calls().into_iter().map(|(ip, _)| ip).collect()
    }
}

#[async_trait]
impl NameserverClient for MockNameserverClient {
    async fn query(&self, ip: IpAddr, query: &DnsQuery) -> Result<EndpointReport, DomainError> {
        self.calls.lock().unwrap().push((ip, query.clone()));

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.error_responses.read().await.get(&ip) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&ip)
            .cloned()
            .unwrap_or_else(|| EndpointReport::new(0, vec![])))
    }
}
