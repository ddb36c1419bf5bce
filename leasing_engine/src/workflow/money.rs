//! Flat-rate loan arithmetic.
//!
//! Amounts are `f64` end to end, matching the NUMERIC(15,2) columns; nothing
//! is rounded between steps. For principal `P`, flat annual rate `r` (percent)
//! and tenor `n` (months):
//!
//! - `margin = P * (r/100) * (n/12)`
//! - `total  = P + margin`
//! - `monthly = total / n`

/// Derived money figures for a contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstalmentTerms {
    /// Loan principal: vehicle value minus down payment.
    pub pokok_pinjaman: f64,
    /// Principal plus flat-rate margin over the full tenor.
    pub total_pinjaman: f64,
    /// Total divided by tenor.
    pub cicilan_per_bulan: f64,
}

/// Total payable under a flat annual rate. A non-positive tenor contributes
/// no margin.
pub fn flat_rate_total(pokok_pinjaman: f64, bunga_flat: f64, tenor_bulan: i16) -> f64 {
    if tenor_bulan <= 0 {
        return pokok_pinjaman;
    }
    let margin = pokok_pinjaman * (bunga_flat / 100.0) * (f64::from(tenor_bulan) / 12.0);
    pokok_pinjaman + margin
}

/// Compute principal, total payable, and monthly instalment from the vehicle
/// value and down payment. Callers validate `tenor_bulan > 0` first.
pub fn instalment_terms(
    nilai_kendaraan: f64,
    dp_dibayar: f64,
    bunga_flat: f64,
    tenor_bulan: i16,
) -> InstalmentTerms {
    let pokok_pinjaman = nilai_kendaraan - dp_dibayar;
    let total_pinjaman = flat_rate_total(pokok_pinjaman, bunga_flat, tenor_bulan);
    let cicilan_per_bulan = if tenor_bulan > 0 {
        total_pinjaman / f64::from(tenor_bulan)
    } else {
        total_pinjaman
    };
    InstalmentTerms {
        pokok_pinjaman,
        total_pinjaman,
        cicilan_per_bulan,
    }
}

/// The product's down-payment envelope for a given vehicle value:
/// `[value * min% / 100, value * max% / 100]`.
pub fn dp_bounds(nilai_kendaraan: f64, dp_persen_min: f64, dp_persen_max: f64) -> (f64, f64) {
    (
        nilai_kendaraan * dp_persen_min / 100.0,
        nilai_kendaraan * dp_persen_max / 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twelve_month_flat_ten_percent() {
        // 20M OTR, 5M DP, 10% flat, 12 months
        let terms = instalment_terms(20_000_000.0, 5_000_000.0, 10.0, 12);
        assert_eq!(terms.pokok_pinjaman, 15_000_000.0);
        assert_eq!(terms.total_pinjaman, 16_500_000.0);
        assert_eq!(terms.cicilan_per_bulan, 1_375_000.0);
    }

    #[test]
    fn dp_rework_recompute() {
        // Same product after the survey bumps the DP to 7M
        let terms = instalment_terms(20_000_000.0, 7_000_000.0, 10.0, 12);
        assert_eq!(terms.pokok_pinjaman, 13_000_000.0);
        assert_eq!(terms.total_pinjaman, 14_300_000.0);
        assert!((terms.cicilan_per_bulan - 1_191_666.666_666_666_7).abs() < 1e-6);
    }

    #[test]
    fn non_positive_tenor_adds_no_margin() {
        assert_eq!(flat_rate_total(1_000_000.0, 10.0, 0), 1_000_000.0);
        assert_eq!(flat_rate_total(1_000_000.0, 10.0, -3), 1_000_000.0);
    }

    #[test]
    fn dp_envelope() {
        let (min, max) = dp_bounds(20_000_000.0, 20.0, 40.0);
        assert_eq!(min, 4_000_000.0);
        assert_eq!(max, 8_000_000.0);
    }

    proptest! {
        // total = principal + margin and monthly * tenor = total, to full
        // floating precision of the division.
        #[test]
        fn terms_are_mutually_consistent(
            nilai in 1_000_000.0..500_000_000.0f64,
            dp_frac in 0.05..0.9f64,
            bunga in 0.0..30.0f64,
            tenor in 1i16..72,
        ) {
            let dp = nilai * dp_frac;
            let terms = instalment_terms(nilai, dp, bunga, tenor);

            let margin = terms.pokok_pinjaman * (bunga / 100.0) * (f64::from(tenor) / 12.0);
            prop_assert!((terms.total_pinjaman - (terms.pokok_pinjaman + margin)).abs() < 1e-6);
            prop_assert_eq!(
                terms.cicilan_per_bulan,
                terms.total_pinjaman / f64::from(tenor)
            );
        }
    }
}
