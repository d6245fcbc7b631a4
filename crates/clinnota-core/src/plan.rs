//! Plan Catalog
//!
//! The three ClinNota subscription tiers and their BRL prices. Prices are
//! integer cents; Stripe takes `unit_amount` in the same unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Subscription plan identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Starter,
    #[default]
    Professional,
    Enterprise,
}

impl PlanId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }

    /// Catalog entry for this id
    pub fn plan(self) -> &'static Plan {
        match self {
            Self::Starter => &PLANS[0],
            Self::Professional => &PLANS[1],
            Self::Enterprise => &PLANS[2],
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "starter" => Ok(Self::Starter),
            "professional" => Ok(Self::Professional),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(CoreError::UnknownPlan(other.to_string())),
        }
    }
}

/// Billing cycle chosen on the checkout page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Portuguese adjective used in product descriptions ("Plano mensal")
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "mensal",
            Self::Yearly => "anual",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(CoreError::UnknownBillingCycle(other.to_string())),
        }
    }
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_cents: i64,
    pub yearly_cents: i64,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

impl Plan {
    /// Amount charged per billing period
    pub const fn price_cents(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_cents,
            BillingCycle::Yearly => self.yearly_cents,
        }
    }

    /// Product name shown on the hosted checkout page
    pub fn product_name(&self) -> String {
        format!("ClinNota {}", self.name)
    }

    /// Product description shown on the hosted checkout page
    pub fn product_description(cycle: BillingCycle) -> String {
        format!("Plano {}", cycle.label())
    }
}

/// The plan table, in display order
pub static PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Starter,
        name: "Starter",
        description: "Ideal para profissionais liberais",
        monthly_cents: 2990,
        yearly_cents: 29900,
        features: &[
            "Até 50 NFS-e por mês",
            "Emissão em segundos",
            "Suporte via email",
            "Certificado digital incluso",
            "Dashboard básico",
        ],
        recommended: false,
    },
    Plan {
        id: PlanId::Professional,
        name: "Professional",
        description: "Para pequenas e médias empresas",
        monthly_cents: 7990,
        yearly_cents: 79900,
        features: &[
            "Até 300 NFS-e por mês",
            "Emissão em segundos",
            "Suporte prioritário",
            "Certificado digital incluso",
            "Dashboard completo",
            "API de integração",
            "Relatórios avançados",
        ],
        recommended: true,
    },
    Plan {
        id: PlanId::Enterprise,
        name: "Enterprise",
        description: "Para grandes empresas",
        monthly_cents: 19990,
        yearly_cents: 199_900,
        features: &[
            "NFS-e ilimitadas",
            "Emissão em segundos",
            "Suporte dedicado 24/7",
            "Certificado digital incluso",
            "Dashboard customizável",
            "API completa",
            "Relatórios personalizados",
            "Múltiplos usuários",
            "Integrações customizadas",
        ],
        recommended: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lookup_matches_table_order() {
        for plan in &PLANS {
            assert_eq!(plan.id.plan(), plan);
        }
    }

    #[test]
    fn test_plan_pricing() {
        let plan = PlanId::Starter.plan();
        assert_eq!(plan.price_cents(BillingCycle::Monthly), 2990);
        assert_eq!(plan.price_cents(BillingCycle::Yearly), 29900);
        assert_eq!(PlanId::Enterprise.plan().price_cents(BillingCycle::Yearly), 199_900);
    }

    #[test]
    fn test_exactly_one_recommended_plan() {
        let recommended: Vec<_> = PLANS.iter().filter(|p| p.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].id, PlanId::default());
    }

    #[test]
    fn test_parse_plan_id() {
        assert_eq!("enterprise".parse::<PlanId>(), Ok(PlanId::Enterprise));
        assert_eq!(
            "platinum".parse::<PlanId>(),
            Err(CoreError::UnknownPlan("platinum".into()))
        );
        // Ids are case-sensitive, as on the wire
        assert!("Starter".parse::<PlanId>().is_err());
    }

    #[test]
    fn test_parse_billing_cycle() {
        assert_eq!("yearly".parse::<BillingCycle>(), Ok(BillingCycle::Yearly));
        assert!("weekly".parse::<BillingCycle>().is_err());
    }

    #[test]
    fn test_product_naming() {
        assert_eq!(PlanId::Professional.plan().product_name(), "ClinNota Professional");
        assert_eq!(Plan::product_description(BillingCycle::Yearly), "Plano anual");
        assert_eq!(Plan::product_description(BillingCycle::Monthly), "Plano mensal");
    }
}
