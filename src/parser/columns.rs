//! Authoritative 0-based column positions of the UPS Billing Data export.
//!
//! The export is headerless with roughly 175 positional columns; only this
//! documented subset carries defined semantics. Positions were verified
//! against real invoices. Columns 174/175 were previously mis-mapped as a
//! return reason; their weight-note reading is provisional.

pub const VERSION: usize = 0;
pub const ACCOUNT_NUMBER: usize = 1;
pub const SHIPPER_NUMBER: usize = 2;
pub const COUNTRY_CODE: usize = 3;
pub const INVOICE_DATE: usize = 4;
pub const INVOICE_NUMBER: usize = 5;
pub const INVOICE_TYPE: usize = 6;
pub const INVOICE_TYPE_DETAIL: usize = 7;
pub const VAT_NUMBER: usize = 8;
pub const CURRENCY: usize = 9;
pub const INVOICE_TOTAL: usize = 10;
pub const SHIPMENT_DATE: usize = 11;
pub const REFERENCE_1: usize = 13;
pub const ORDER_REFERENCE: usize = 15;
pub const PAYMENT_TERMS: usize = 17;
pub const PACKAGE_INDICATOR: usize = 18;
pub const TRACKING_NUMBER: usize = 20;
pub const ACTUAL_WEIGHT: usize = 26;
pub const ACTUAL_WEIGHT_UNIT: usize = 27;
pub const BILLED_WEIGHT: usize = 28;
pub const BILLED_WEIGHT_UNIT: usize = 29;
pub const PACKAGE_TYPE: usize = 30;
pub const ZONE: usize = 31;
pub const SERVICE_CODE: usize = 33;
pub const SHIPMENT_TYPE: usize = 34;
pub const SHIPMENT_SUBTYPE: usize = 35;
pub const CHARGE_CATEGORY: usize = 43;
pub const CHARGE_CODE: usize = 44;
pub const CHARGE_DESCRIPTION: usize = 45;
pub const DISCOUNT_AMOUNT: usize = 51;
pub const NET_AMOUNT: usize = 52;
pub const SENDER_NAME: usize = 67;
pub const SENDER_STREET: usize = 68;
pub const SENDER_CITY: usize = 70;
pub const SENDER_POSTAL: usize = 72;
pub const SENDER_COUNTRY: usize = 73;
pub const RECIPIENT_NAME: usize = 74;
pub const RECIPIENT_COMPANY: usize = 75;
pub const RECIPIENT_STREET: usize = 76;
pub const RECIPIENT_CITY: usize = 78;
pub const RECIPIENT_POSTAL: usize = 80;
pub const RECIPIENT_COUNTRY: usize = 81;
pub const PICKUP_DATE: usize = 116;
pub const DELIVERY_DATE: usize = 117;
pub const DECLARED_VALUE: usize = 129;
pub const GOODS_DESCRIPTION: usize = 130;
pub const ENTERED_WEIGHT_NOTE: usize = 174;
pub const AUDITED_WEIGHT_NOTE: usize = 175;
