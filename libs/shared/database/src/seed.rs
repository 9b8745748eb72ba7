use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use shared_models::{
    Doctor, DoctorFeedback, DoctorStatus, Hospital, HospitalKind, Patient, PatientStatus, Severity,
};

fn today_at(hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    Utc::now().date_naive().and_time(time).and_utc()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            id: "H001".to_string(),
            name: "City Central Hospital".to_string(),
            kind: HospitalKind::Government,
            location: "Downtown, Metro City".to_string(),
            distance: "2.5 km".to_string(),
            rating: 4.5,
            opening_time: "08:00 AM".to_string(),
            closing_time: "10:00 PM".to_string(),
        },
        Hospital {
            id: "H002".to_string(),
            name: "St. Mary's Medical Center".to_string(),
            kind: HospitalKind::Private,
            location: "North Wing, Metro City".to_string(),
            distance: "5.1 km".to_string(),
            rating: 4.8,
            opening_time: "24 Hours".to_string(),
            closing_time: "24 Hours".to_string(),
        },
        Hospital {
            id: "H003".to_string(),
            name: "General Public Health Clinic".to_string(),
            kind: HospitalKind::Government,
            location: "South Metro".to_string(),
            distance: "1.2 km".to_string(),
            rating: 3.9,
            opening_time: "07:00 AM".to_string(),
            closing_time: "08:00 PM".to_string(),
        },
        Hospital {
            id: "H004".to_string(),
            name: "Sunrise Specialty Clinic".to_string(),
            kind: HospitalKind::Private,
            location: "East Side Heights".to_string(),
            distance: "8.4 km".to_string(),
            rating: 4.6,
            opening_time: "09:00 AM".to_string(),
            closing_time: "06:00 PM".to_string(),
        },
    ]
}

struct SeedPatient {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    date_of_birth: (i32, u32, u32),
    gender: &'static str,
    symptom: &'static str,
    severity: Severity,
    is_emergency: bool,
    notes: &'static str,
    arrival: (u32, u32),
    estimated_wait: u32,
    doctor_id: Option<&'static str>,
    status: PatientStatus,
}

impl SeedPatient {
    fn into_patient(self) -> Patient {
        let (year, month, day) = self.date_of_birth;
        let (hour, minute) = self.arrival;
        Patient {
            id: self.id.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            email: format!("{}@example.com", self.first_name.to_lowercase()),
            phone: self.phone.to_string(),
            date_of_birth: date(year, month, day),
            gender: self.gender.to_string(),
            symptom: self.symptom.to_string(),
            severity: self.severity,
            is_emergency: self.is_emergency,
            notes: self.notes.to_string(),
            arrival_time: today_at(hour, minute),
            estimated_wait: self.estimated_wait,
            status: self.status,
            doctor_id: self.doctor_id.map(String::from),
        }
    }
}

pub fn patients() -> Vec<Patient> {
    vec![
        SeedPatient {
            id: "P001",
            first_name: "John",
            last_name: "Smith",
            phone: "+1-555-0101",
            date_of_birth: (1985, 3, 15),
            gender: "male",
            symptom: "Chest Pain",
            severity: Severity::Severe,
            is_emergency: false,
            notes: "Intermittent chest pain for 2 hours",
            arrival: (9, 15),
            estimated_wait: 8,
            doctor_id: Some("D001"),
            status: PatientStatus::InProgress,
        },
        SeedPatient {
            id: "P002",
            first_name: "Emma",
            last_name: "Johnson",
            phone: "+1-555-0102",
            date_of_birth: (1992, 7, 22),
            gender: "female",
            symptom: "Severe Allergic Reaction",
            severity: Severity::Severe,
            is_emergency: true,
            notes: "Breathing difficulty, visible swelling",
            arrival: (9, 30),
            estimated_wait: 12,
            doctor_id: Some("D002"),
            status: PatientStatus::InProgress,
        },
        SeedPatient {
            id: "P003",
            first_name: "Robert",
            last_name: "Brown",
            phone: "+1-555-0103",
            date_of_birth: (1978, 11, 8),
            gender: "male",
            symptom: "Broken Arm",
            severity: Severity::Severe,
            is_emergency: false,
            notes: "Fall from height, left arm broken",
            arrival: (9, 45),
            estimated_wait: 22,
            doctor_id: None,
            status: PatientStatus::Waiting,
        },
        SeedPatient {
            id: "P004",
            first_name: "Sophia",
            last_name: "Garcia",
            phone: "+1-555-0104",
            date_of_birth: (1995, 12, 1),
            gender: "female",
            symptom: "High Fever",
            severity: Severity::Moderate,
            is_emergency: false,
            notes: "Fever of 103F for 24 hours",
            arrival: (10, 5),
            estimated_wait: 15,
            doctor_id: None,
            status: PatientStatus::Waiting,
        },
        SeedPatient {
            id: "P005",
            first_name: "David",
            last_name: "Miller",
            phone: "+1-555-0105",
            date_of_birth: (1962, 5, 20),
            gender: "male",
            symptom: "Shortness of Breath",
            severity: Severity::Severe,
            is_emergency: true,
            notes: "COPD exacerbation suspected",
            arrival: (10, 15),
            estimated_wait: 5,
            doctor_id: Some("D001"),
            status: PatientStatus::InProgress,
        },
    ]
    .into_iter()
    .map(SeedPatient::into_patient)
    .collect()
}

fn feedback(rating: u8, comment: &str, patient_name: &str) -> DoctorFeedback {
    DoctorFeedback {
        rating,
        comment: comment.to_string(),
        patient_name: patient_name.to_string(),
    }
}

fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    status: DoctorStatus,
    current_patients: u32,
    max_capacity: u32,
    experience_years: u32,
    bio: &str,
    feedback: Vec<DoctorFeedback>,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        status,
        current_patients,
        max_capacity,
        experience_years,
        bio: bio.to_string(),
        feedback,
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "D001",
            "Dr. Sarah Williams",
            "Emergency Medicine",
            DoctorStatus::Busy,
            2,
            5,
            12,
            "Specialist in trauma and acute care with over a decade of experience in high-pressure emergency departments.",
            vec![
                feedback(5, "Incredible doctor, saved my life!", "John Smith"),
                feedback(4, "Very professional and calm.", "Emma Davis"),
            ],
        ),
        doctor(
            "D002",
            "Dr. Michael Chen",
            "Cardiology",
            DoctorStatus::Busy,
            1,
            4,
            15,
            "Board-certified cardiologist focusing on preventative heart health and complex cardiovascular conditions.",
            vec![feedback(5, "Extremely knowledgeable and caring.", "Robert Brown")],
        ),
        doctor(
            "D003",
            "Dr. Jennifer Lee",
            "Orthopedics",
            DoctorStatus::Available,
            0,
            5,
            8,
            "Expert in sports medicine and joint replacement surgery, helping patients regain mobility.",
            vec![feedback(5, "Back on my feet thanks to Dr. Lee!", "Sophia Garcia")],
        ),
        doctor(
            "D004",
            "Dr. Robert Martinez",
            "General Medicine",
            DoctorStatus::Break,
            0,
            6,
            20,
            "Family physician dedicated to holistic care and long-term wellness for patients of all ages.",
            Vec::new(),
        ),
        doctor(
            "D005",
            "Dr. Lisa Wong",
            "Pediatrics",
            DoctorStatus::Available,
            0,
            4,
            10,
            "Compassionate pediatrician specializing in childhood development and chronic pediatric conditions.",
            vec![feedback(5, "Wonderful with my kids!", "David Miller")],
        ),
        doctor(
            "D006",
            "Dr. James Wilson",
            "Neurology",
            DoctorStatus::Available,
            0,
            3,
            18,
            "Leading neurologist focused on headache management and neuro-rehabilitation.",
            Vec::new(),
        ),
    ]
}
