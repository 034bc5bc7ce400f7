use std::fmt;

/// Rupee amount with 2 decimal places (paise), stored as a scaled integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    pub const ZERO: Amount = Amount(0);

    pub fn from_rupees(value: i64) -> Self {
        Amount(value * Self::SCALE)
    }

    pub fn from_paise(value: i64) -> Self {
        Amount(value)
    }

    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scale by a basis-point rate (1800 = 18%), rounding half-up to the paise.
    ///
    /// Half-up rounds ties away from zero, matching how GST and commission
    /// amounts appear on invoices.
    pub fn mul_rate_bp(&self, bp: u32) -> Self {
        let product = self.0 as i128 * bp as i128;
        let rounded = if product >= 0 {
            (product + 5_000) / 10_000
        } else {
            (product - 5_000) / 10_000
        };
        Amount(rounded as i64)
    }

    /// The gross amount once a basis-point tax rate is added on top.
    pub fn with_tax_bp(&self, bp: u32) -> Self {
        *self + self.mul_rate_bp(bp)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / Self::SCALE;
        let frac = abs % Self::SCALE;
        write!(f, "{sign}{whole}.{frac:02}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rupees_scales() {
        assert_eq!(Amount::from_rupees(2000), Amount::from_paise(200_000));
        assert_eq!(Amount::from_rupees(-50), Amount::from_paise(-5_000));
    }

    #[test]
    fn from_float_converts_correctly() {
        assert_eq!(Amount::from_float(100.0), Amount::from_paise(10_000));
        assert_eq!(Amount::from_float(1.5), Amount::from_paise(150));
        assert_eq!(Amount::from_float(0.01), Amount::from_paise(1));
        assert_eq!(Amount::from_float(-50.25), Amount::from_paise(-5_025));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Amount::from_paise(10_000).to_string(), "100.00");
        assert_eq!(Amount::from_paise(150).to_string(), "1.50");
        assert_eq!(Amount::from_paise(1).to_string(), "0.01");
        assert_eq!(Amount::from_paise(0).to_string(), "0.00");
        assert_eq!(Amount::from_paise(-5_025).to_string(), "-50.25");
    }

    #[test]
    fn gst_on_round_billing() {
        // 1000.00 at 18% GST collects 1180.00 total
        let billing = Amount::from_rupees(1000);
        assert_eq!(billing.with_tax_bp(1800), Amount::from_rupees(1180));
    }

    #[test]
    fn commission_of_collectible() {
        // 10% of 1180.00 is 118.00
        let collectible = Amount::from_rupees(1180);
        assert_eq!(collectible.mul_rate_bp(1000), Amount::from_rupees(118));
    }

    #[test]
    fn rate_rounds_half_up() {
        // 0.15 at 10% = 0.015 -> 0.02
        assert_eq!(Amount::from_paise(15).mul_rate_bp(1000), Amount::from_paise(2));
        // 0.14 at 10% = 0.014 -> 0.01
        assert_eq!(Amount::from_paise(14).mul_rate_bp(1000), Amount::from_paise(1));
        // ties round away from zero for negatives too
        assert_eq!(Amount::from_paise(-15).mul_rate_bp(1000), Amount::from_paise(-2));
    }

    #[test]
    fn arithmetic() {
        let mut a = Amount::from_paise(100);
        a += Amount::from_paise(50);
        assert_eq!(a, Amount::from_paise(150));
        a -= Amount::from_paise(30);
        assert_eq!(a, Amount::from_paise(120));
        assert_eq!(a - Amount::from_paise(20), Amount::from_paise(100));
        assert_eq!(-a, Amount::from_paise(-120));
    }

    #[test]
    fn ordering() {
        assert!(Amount::from_paise(-100) < Amount::ZERO);
        assert!(Amount::ZERO < Amount::from_paise(100));
    }
}
