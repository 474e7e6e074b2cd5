use super::business::BusinessManager;
use super::loan::LoanManager;
use crate::domain::business::BUSINESS_FIELD_COUNT;
use crate::domain::fields::expect_arity;
use crate::domain::loan::LOAN_FIELD_COUNT;
use crate::error::{RecordError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Successful outcome of an invocation.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Response {
    pub payload: Vec<u8>,
}

impl Response {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into().into_bytes(),
        }
    }

    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// One named operation of the invocation surface.
#[async_trait]
pub trait OperationHandler: Send + Sync {
    async fn handle(&self, args: &[String]) -> Result<Response>;
}

/// Routes an operation name and its positional arguments to a handler.
#[derive(Default)]
pub struct Dispatcher {
    routes: HashMap<&'static str, Arc<dyn OperationHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every business and loan operation, including the legacy
    /// aliases (`putNewBusinessInfo`, `getLoanInfo`, ...).
    pub fn with_managers(business: Arc<BusinessManager>, loans: Arc<LoanManager>) -> Self {
        let mut dispatcher = Self::new();

        let create_business: Arc<dyn OperationHandler> = Arc::new(CreateBusiness(business.clone()));
        let read_business: Arc<dyn OperationHandler> = Arc::new(ReadBusiness(business.clone()));
        let read_wallet_id: Arc<dyn OperationHandler> = Arc::new(ReadWalletId(business));
        let create_loan: Arc<dyn OperationHandler> = Arc::new(CreateLoan(loans.clone()));
        let read_loan: Arc<dyn OperationHandler> = Arc::new(ReadLoan(loans.clone()));
        let update_loan: Arc<dyn OperationHandler> = Arc::new(UpdateLoan(loans));

        for (names, handler) in [
            (["createBusiness", "putNewBusinessInfo"], create_business),
            (["readBusiness", "getBusinessInfo"], read_business),
            (["readWalletID", "getWalletID"], read_wallet_id),
            (["createLoan", "newLoanInfo"], create_loan),
            (["readLoan", "getLoanInfo"], read_loan),
            (["updateLoan", "updateLoanInfo"], update_loan),
        ] {
            for name in names {
                dispatcher.register(name, handler.clone());
            }
        }
        dispatcher
    }

    pub fn register(&mut self, name: &'static str, handler: Arc<dyn OperationHandler>) {
        self.routes.insert(name, handler);
    }

    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<Response> {
        let handler = self
            .routes
            .get(function)
            .ok_or_else(|| RecordError::UnknownOperation(function.to_string()))?;
        handler.handle(args).await
    }
}

struct CreateBusiness(Arc<BusinessManager>);

#[async_trait]
impl OperationHandler for CreateBusiness {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("createBusiness", args, BUSINESS_FIELD_COUNT + 1)?;
        self.0.create_business(&args[0], &args[1..]).await?;
        Ok(Response::empty())
    }
}

struct ReadBusiness(Arc<BusinessManager>);

#[async_trait]
impl OperationHandler for ReadBusiness {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("readBusiness", args, 1)?;
        let record = self.0.read_business(&args[0]).await?;
        Ok(Response::text(record.to_string()))
    }
}

struct ReadWalletId(Arc<BusinessManager>);

#[async_trait]
impl OperationHandler for ReadWalletId {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("readWalletID", args, 2)?;
        let wallet_id = self.0.read_wallet_id(&args[0], &args[1]).await?;
        Ok(Response::text(wallet_id))
    }
}

struct CreateLoan(Arc<LoanManager>);

#[async_trait]
impl OperationHandler for CreateLoan {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("createLoan", args, LOAN_FIELD_COUNT + 1)?;
        let message = self.0.create_loan(&args[0], &args[1..]).await?;
        Ok(Response::text(message))
    }
}

struct ReadLoan(Arc<LoanManager>);

#[async_trait]
impl OperationHandler for ReadLoan {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("readLoan", args, 1)?;
        let record = self.0.read_loan(&args[0]).await?;
        Ok(Response::text(record.summary()))
    }
}

struct UpdateLoan(Arc<LoanManager>);

#[async_trait]
impl OperationHandler for UpdateLoan {
    async fn handle(&self, args: &[String]) -> Result<Response> {
        expect_arity("updateLoan", args, 3)?;
        let message = self.0.update_loan(&args[0], &args[1], &args[2]).await?;
        Ok(Response::text(message))
    }
}
