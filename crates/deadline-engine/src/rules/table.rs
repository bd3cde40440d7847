//! Deadline rule data for all 51 jurisdictions
//!
//! Day counts run from the invoice/delivery date. Where the statute runs from
//! project completion, the description says so and the day count is the
//! conservative invoice-based reading.

use super::{LienFilingRule, PreliminaryNoticeRule, SpecialRules, StateRule};
use crate::jurisdiction::State;

pub static STATE_RULES: [StateRule; 51] = [
    StateRule {
        state: State::AL,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice to owner before furnishing preserves the full unpaid-price lien",
            "Ala. Code § 35-11-210",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 4 months after last furnishing for suppliers and subcontractors",
            "Ala. Code § 35-11-215",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Original contractors have 6 months",
        },
    },
    StateRule {
        state: State::AK,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of Right to Lien is optional but recommended",
            "AS 34.35.064",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing or completion",
            "AS 34.35.068",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "15 days after a recorded notice of completion",
        },
    },
    StateRule {
        state: State::AZ,
        preliminary_notice: PreliminaryNoticeRule::required(
            20,
            "20-Day Preliminary Notice within 20 days of first furnishing",
            "A.R.S. § 33-992.01",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after completion, or 60 days after a notice of completion",
            "A.R.S. § 33-993",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "Owner-occupied residences limit lien rights to direct contractors",
        },
    },
    StateRule {
        state: State::AR,
        preliminary_notice: PreliminaryNoticeRule::required(
            75,
            "Notice of intent / pre-lien notice within 75 days of first furnishing",
            "Ark. Code § 18-44-115",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after last furnishing",
            "Ark. Code § 18-44-117",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: false,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Residential projects require the pre-lien notice before furnishing",
        },
    },
    StateRule {
        state: State::CA,
        preliminary_notice: PreliminaryNoticeRule::required(
            20,
            "20-Day Preliminary Notice within 20 days of first furnishing",
            "Cal. Civ. Code § 8204",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after completion, or 30 days after a Notice of Completion",
            "Cal. Civ. Code § 8414",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "Lien deadline runs from completion; invoice date is an approximation",
        },
    },
    StateRule {
        state: State::CO,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of intent to lien at least 10 days before recording",
            "C.R.S. § 38-22-109(3)",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 4 months after last furnishing",
            "C.R.S. § 38-22-109(5)",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::CT,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of intent to lien served within 90 days after last furnishing",
            "C.G.S. § 49-35",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "C.G.S. § 49-34",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Owner must be served within 30 days after recording",
        },
    },
    StateRule {
        state: State::DE,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "25 Del. C. § 2711",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "25 Del. C. § 2711",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Statement of claim is filed with the Superior Court",
        },
    },
    StateRule {
        state: State::DC,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "D.C. Code § 40-301.02",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after completion of the building",
            "D.C. Code § 40-301.02",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Subcontractors must also serve the owner with the notice of lien",
        },
    },
    StateRule {
        state: State::FL,
        preliminary_notice: PreliminaryNoticeRule::required(
            45,
            "Notice to Owner within 45 days of first furnishing",
            "F.S. § 713.06",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Claim of Lien within 90 days after final furnishing",
            "F.S. § 713.08",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Notice of Commencement governs who must be served",
        },
    },
    StateRule {
        state: State::GA,
        preliminary_notice: PreliminaryNoticeRule::required(
            30,
            "Notice to Contractor within 30 days of first furnishing when a Notice of Commencement is filed",
            "O.C.G.A. § 44-14-361.5",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "O.C.G.A. § 44-14-361.1",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "Notice of intent to lien 30 days before filing",
        },
    },
    StateRule {
        state: State::HI,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "HRS § 507-42",
        ),
        lien_filing: LienFilingRule::days(
            45,
            "Application for lien within 45 days after completion",
            "HRS § 507-43",
        ),
        special_rules: SpecialRules {
            weekend_extension: false,
            holiday_extension: false,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "Deadline is strict: no weekend or holiday extension",
        },
    },
    StateRule {
        state: State::ID,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required for commercial work",
            "Idaho Code § 45-507",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "Idaho Code § 45-507",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Residential disclosures fall on the general contractor",
        },
    },
    StateRule {
        state: State::IL,
        preliminary_notice: PreliminaryNoticeRule::required(
            90,
            "Subcontractor's 90-day notice to owner",
            "770 ILCS 60/24",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 4 months after completion to bind third parties",
            "770 ILCS 60/7",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Owner-occupied residential requires notice within 60 days",
        },
    },
    StateRule {
        state: State::IN,
        preliminary_notice: PreliminaryNoticeRule::required(
            30,
            "Pre-lien notice within 30 days of first furnishing (residential)",
            "IC § 32-28-3-1",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing (60 days residential)",
            "IC § 32-28-3-3",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::IA,
        preliminary_notice: PreliminaryNoticeRule::required(
            30,
            "Preliminary notice posted to MNLR within 30 days (residential)",
            "Iowa Code § 572.13A",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "Iowa Code § 572.9",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Filed with the Mechanics' Notice and Lien Registry",
        },
    },
    StateRule {
        state: State::KS,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required for commercial work",
            "K.S.A. § 60-1103",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 3 months after last furnishing",
            "K.S.A. § 60-1103",
        ),
        special_rules: SpecialRules {
            weekend_extension: false,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Only holiday deadlines roll forward",
        },
    },
    StateRule {
        state: State::KY,
        preliminary_notice: PreliminaryNoticeRule::required(
            75,
            "Notice of intent to lien within 75 days of last furnishing",
            "KRS 376.010(3)",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Within 6 months after last furnishing",
            "KRS 376.080",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Residential notice applies to claims over $1,000",
        },
    },
    StateRule {
        state: State::LA,
        preliminary_notice: PreliminaryNoticeRule::required(
            75,
            "Notice of nonpayment within 75 days from the last day of the month of delivery",
            "La. R.S. 9:4802(G)",
        ),
        lien_filing: LienFilingRule::days(
            60,
            "Within 60 days after substantial completion or notice of termination",
            "La. R.S. 9:4822",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "30 days when a notice of contract is filed",
        },
    },
    StateRule {
        state: State::ME,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "10 M.R.S. § 3251",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "10 M.R.S. § 3253",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Suit to enforce within 120 days",
        },
    },
    StateRule {
        state: State::MD,
        preliminary_notice: PreliminaryNoticeRule::required(
            120,
            "Notice of intent to claim a lien within 120 days after last furnishing",
            "Md. Code, Real Prop. § 9-104",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Petition to establish lien within 180 days after last furnishing",
            "Md. Code, Real Prop. § 9-105",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::MA,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of identification optional; notice of contract recorded with the lien",
            "M.G.L. c. 254 § 4",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Statement of account within 90 days after last furnishing",
            "M.G.L. c. 254 § 8",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "Notice of substantial completion shortens the window",
        },
    },
    StateRule {
        state: State::MI,
        preliminary_notice: PreliminaryNoticeRule::required(
            20,
            "Notice of Furnishing within 20 days of first furnishing",
            "MCL 570.1109",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Claim of lien within 90 days after last furnishing",
            "MCL 570.1111",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Residential claims require a Homeowner Construction Lien Recovery Fund notice",
        },
    },
    StateRule {
        state: State::MN,
        preliminary_notice: PreliminaryNoticeRule::required(
            45,
            "Pre-lien notice within 45 days of first furnishing",
            "Minn. Stat. § 514.011",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after last furnishing",
            "Minn. Stat. § 514.08",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::MS,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Stop notice to owner is optional",
            "Miss. Code § 85-7-181",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "Miss. Code § 85-7-405",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::MO,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of intent to lien at least 10 days before filing",
            "RSMo § 429.100",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Within 6 months after last furnishing",
            "RSMo § 429.080",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Original contractors must give the residential owner notice",
        },
    },
    StateRule {
        state: State::MT,
        preliminary_notice: PreliminaryNoticeRule::required(
            20,
            "Notice of Right to Claim a Lien within 20 days of first furnishing",
            "MCA § 71-3-531",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "MCA § 71-3-535",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "",
        },
    },
    StateRule {
        state: State::NE,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required for commercial work",
            "Neb. Rev. Stat. § 52-135",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after last furnishing",
            "Neb. Rev. Stat. § 52-137",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "",
        },
    },
    StateRule {
        state: State::NV,
        preliminary_notice: PreliminaryNoticeRule::required(
            31,
            "Notice of Right to Lien within 31 days of first furnishing",
            "NRS 108.245",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "NRS 108.226",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "40 days after a recorded notice of completion",
        },
    },
    StateRule {
        state: State::NH,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice to owner optional for subcontractors and suppliers",
            "RSA 447:5",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Perfected by attachment within 120 days after last furnishing",
            "RSA 447:9",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::NJ,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of Unpaid Balance required only for residential work",
            "N.J.S.A. 2A:44A-20",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "N.J.S.A. 2A:44A-6",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Residential claims go through arbitration within 60 days",
        },
    },
    StateRule {
        state: State::NM,
        preliminary_notice: PreliminaryNoticeRule::required(
            60,
            "Preliminary notice within 60 days of first furnishing on jobs over $5,000",
            "NMSA § 48-2-2.1",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after completion for subcontractors and suppliers",
            "NMSA § 48-2-6",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::NY,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "N.Y. Lien Law § 10",
        ),
        lien_filing: LienFilingRule::days(
            240,
            "Within 8 months after last furnishing (4 months for single-family residential)",
            "N.Y. Lien Law § 10",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::NC,
        preliminary_notice: PreliminaryNoticeRule::required(
            15,
            "Notice to Lien Agent within 15 days of first furnishing",
            "N.C.G.S. § 44A-11.2",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after last furnishing",
            "N.C.G.S. § 44A-12",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Late lien agent notices still protect furnishing after service",
        },
    },
    StateRule {
        state: State::ND,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of intent to lien at least 15 days before recording",
            "N.D.C.C. § 35-27-02",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "N.D.C.C. § 35-27-13",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::OH,
        preliminary_notice: PreliminaryNoticeRule::required(
            21,
            "Notice of Furnishing within 21 days of first furnishing",
            "O.R.C. § 1311.05",
        ),
        lien_filing: LienFilingRule::days(
            75,
            "Within 75 days after last furnishing (60 days residential)",
            "O.R.C. § 1311.06",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "Notice of Furnishing only required when a Notice of Commencement is recorded",
        },
    },
    StateRule {
        state: State::OK,
        preliminary_notice: PreliminaryNoticeRule::required(
            75,
            "Pre-lien notice within 75 days after last furnishing",
            "42 O.S. § 142.6",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "42 O.S. § 143",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::OR,
        preliminary_notice: PreliminaryNoticeRule::formula(
            "8 business days after first furnishing",
            "Notice of Right to Lien within 8 business days of first delivery",
            "ORS 87.021",
        ),
        lien_filing: LienFilingRule::days(
            75,
            "Within 75 days after last furnishing",
            "ORS 87.035",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "Late notices protect only materials delivered after service",
        },
    },
    StateRule {
        state: State::PA,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of Furnishing required only on projects over $1.5M using the State Construction Notices Directory",
            "49 P.S. § 1501.1",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Within 6 months after completion of the claimant's work",
            "49 P.S. § 1502",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Subcontractors must give 30 days formal notice of intent",
        },
    },
    StateRule {
        state: State::RI,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of possible lien rights required only for direct contracts with the owner",
            "R.I. Gen. Laws § 34-28-4.1",
        ),
        lien_filing: LienFilingRule::days(
            200,
            "Within 200 days after last furnishing",
            "R.I. Gen. Laws § 34-28-4",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::SC,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice of furnishing optional; protects against owner overpayment",
            "S.C. Code § 29-5-20",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "S.C. Code § 29-5-90",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::SD,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required for commercial work",
            "SDCL 44-9-53",
        ),
        lien_filing: LienFilingRule::days(
            120,
            "Within 120 days after last furnishing",
            "SDCL 44-9-15",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::TN,
        preliminary_notice: PreliminaryNoticeRule::required(
            90,
            "Notice of Nonpayment within 90 days of the last day of each month of furnishing",
            "T.C.A. § 66-11-145",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after completion or abandonment",
            "T.C.A. § 66-11-112",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "",
        },
    },
    StateRule {
        state: State::TX,
        preliminary_notice: PreliminaryNoticeRule::formula(
            "15th day of the 2nd month (residential) or 3rd month (commercial) after the month of delivery",
            "Notice of claim for unpaid balance to owner and original contractor",
            "Tex. Prop. Code § 53.056",
        ),
        lien_filing: LienFilingRule::formula(
            "15th day of the 3rd month (residential) or 4th month (commercial) after the month of delivery",
            "Lien affidavit recorded with the county clerk",
            "Tex. Prop. Code § 53.052",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Month-based deadlines; day counts do not apply",
        },
    },
    StateRule {
        state: State::UT,
        preliminary_notice: PreliminaryNoticeRule::required(
            20,
            "Preliminary notice filed on the State Construction Registry within 20 days",
            "Utah Code § 38-1a-501",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after final completion",
            "Utah Code § 38-1a-502",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: true,
            notes: "180 days when no notice of completion is filed",
        },
    },
    StateRule {
        state: State::VT,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice to owner optional for subcontractors",
            "9 V.S.A. § 1923",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Within 180 days after last furnishing",
            "9 V.S.A. § 1921",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::VA,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "Notice to the mechanics' lien agent within 30 days when one is designated",
            "Va. Code § 43-4.01",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days from the last day of the month of last furnishing",
            "Va. Code § 43-4",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "Never later than 150 days after completion",
        },
    },
    StateRule {
        state: State::WA,
        preliminary_notice: PreliminaryNoticeRule::required(
            60,
            "Notice to owner within 60 days of first furnishing (material suppliers)",
            "RCW 60.04.031",
        ),
        lien_filing: LienFilingRule::days(
            90,
            "Within 90 days after last furnishing",
            "RCW 60.04.091",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "Preliminary notice applies to material suppliers only",
        },
    },
    StateRule {
        state: State::WV,
        preliminary_notice: PreliminaryNoticeRule::optional(
            "No preliminary notice required",
            "W. Va. Code § 38-2-31",
        ),
        lien_filing: LienFilingRule::days(
            100,
            "Within 100 days after last furnishing",
            "W. Va. Code § 38-2-7",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        },
    },
    StateRule {
        state: State::WI,
        preliminary_notice: PreliminaryNoticeRule::required(
            60,
            "Notice of lien rights within 60 days of first furnishing",
            "Wis. Stat. § 779.02(2)",
        ),
        lien_filing: LienFilingRule::days(
            180,
            "Within 6 months after last furnishing",
            "Wis. Stat. § 779.06",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: true,
            notice_of_completion_trigger: false,
            notes: "30 days notice of intent before filing",
        },
    },
    StateRule {
        state: State::WY,
        preliminary_notice: PreliminaryNoticeRule::required(
            30,
            "Notice of right to lien within 30 days of first furnishing",
            "Wyo. Stat. § 29-2-112",
        ),
        lien_filing: LienFilingRule::days(
            150,
            "Within 150 days after last furnishing (120 days for subcontractors)",
            "Wyo. Stat. § 29-2-106",
        ),
        special_rules: SpecialRules {
            weekend_extension: true,
            holiday_extension: true,
            residential_vs_commercial: false,
            notice_of_completion_trigger: true,
            notes: "",
        },
    },
];
