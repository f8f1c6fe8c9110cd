pub mod p910_case_support_360;
