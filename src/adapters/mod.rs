pub mod loan_record;
pub mod mock;
pub mod stub;

pub use loan_record::LoanRecord;
