use crate::model::{GuiWindow, ProjectModule, Topic, WeekContent, WeekNumber};

pub(super) static WEEKS: [WeekContent; 8] = [
    WeekContent {
        week: WeekNumber::new(1),
        title: "Minggu 1: Python Basics & OpenCV",
        difficulty: "🟢 Easy",
        duration: "6-7 hari",
        tutorials: "5 tutorials",
        objectives: &[
            "Setup development environment",
            "Memahami Python fundamentals untuk CV",
            "Mengenal OpenCV library",
            "Image manipulation & processing",
            "Build reusable image utilities",
        ],
        topics: &[
            Topic {
                title: "01. Hello OpenCV",
                description: "Installation & setup, reading/displaying/saving images, image as numpy arrays, color spaces (BGR, RGB, Grayscale)",
            },
            Topic {
                title: "02. Image Operations",
                description: "Resize, crop, rotate, flip images. Color conversion dan transformasi dasar",
            },
            Topic {
                title: "03. Drawing Shapes",
                description: "Draw rectangles, circles, lines, dan text pada images",
            },
            Topic {
                title: "04. Webcam Basics",
                description: "Access webcam, capture frames, real-time processing, frame rate optimization",
            },
            Topic {
                title: "05. Latihan",
                description: "Mini project kombinasi semua materi week 1",
            },
        ],
        module: Some(ProjectModule {
            file: "image_utils.py",
            functions: &[
                "load_image(path) - Load dan validate image",
                "resize_image(image, width, height) - Resize dengan aspect ratio",
                "preprocess_image(image) - Standardize image untuk processing",
                "convert_to_grayscale(image) - Convert color space",
                "save_image(image, path) - Save dengan compression",
                "validate_image_quality(image) - Check blur, brightness, etc",
            ],
        }),
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-1-python-basics/learning
python 01_hello_opencv.py
python 02_image_operations.py
python 03_drawing_shapes.py
python 04_webcam_basics.py
python latihan.py

cd ../project
python test_utils.py",
    },
    WeekContent {
        week: WeekNumber::new(2),
        title: "Minggu 2: Face Detection",
        difficulty: "🟡 Medium",
        duration: "6-7 hari",
        tutorials: "4 tutorials",
        objectives: &[
            "Memahami konsep face detection",
            "Menggunakan Haar Cascade Classifier",
            "Mendeteksi wajah dari gambar dan webcam",
            "Multiple face detection",
            "Parameter tuning untuk akurasi optimal",
        ],
        topics: &[
            Topic {
                title: "01. Face Detection dari Image",
                description: "Load Haar Cascade, detect faces dari gambar statis, draw bounding boxes, save hasil detection",
            },
            Topic {
                title: "02. Face Detection Webcam",
                description: "Real-time face detection dari webcam feed, handle multiple faces, FPS optimization",
            },
            Topic {
                title: "03. Eye Detection",
                description: "Deteksi mata dari region wajah, ROI (Region of Interest) processing",
            },
            Topic {
                title: "04. Advanced Detection",
                description: "Parameter tuning (scaleFactor, minNeighbors, minSize), optimizing untuk berbagai kondisi",
            },
        ],
        module: Some(ProjectModule {
            file: "face_detector.py",
            functions: &[
                "FaceDetector class - Face detection dengan Haar Cascade",
                "detect_faces() - Detect faces dari image",
                "detect_faces_webcam() - Real-time detection",
                "draw_detections() - Draw bounding boxes",
                "get_face_regions() - Extract face ROIs",
                "validate_detection() - Quality validation",
            ],
        }),
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-2-face-detection/learning
python 01_face_detection_image.py
python 02_face_detection_webcam.py
python 03_eye_detection.py
python 04_advanced_detection.py

cd ../project
python test_detector.py",
    },
    WeekContent {
        week: WeekNumber::new(3),
        title: "Minggu 3: Face Recognition",
        difficulty: "🟠 Medium",
        duration: "7-8 hari",
        tutorials: "3 tutorials",
        objectives: &[
            "Memahami face recognition vs face detection",
            "Menggunakan face_recognition library",
            "Face encodings dan comparison",
            "Build recognition system",
            "Known faces database management",
        ],
        topics: &[
            Topic {
                title: "01. Face Encodings",
                description: "Generate face encodings (128-dimension vectors), understand face representation",
            },
            Topic {
                title: "02. Face Comparison",
                description: "Compare face encodings, face_distance() dan face_compare(), tolerance levels",
            },
            Topic {
                title: "03. Recognition Webcam",
                description: "Real-time face recognition dari webcam, identify unknown vs known faces",
            },
        ],
        module: Some(ProjectModule {
            file: "face_recognizer.py",
            functions: &[
                "FaceRecognizer class - Main recognition engine",
                "encode_face() - Generate face encoding",
                "recognize_face() - Identify person from encoding",
                "add_known_face() - Add to known faces database",
                "get_all_encodings() - Export encodings",
                "calculate_confidence() - Recognition confidence score",
            ],
        }),
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-3-face-recognition/learning
python 01_face_encodings.py
python 02_face_comparison.py
python 03_recognition_webcam.py

cd ../project
python test_recognizer.py",
    },
    WeekContent {
        week: WeekNumber::new(4),
        title: "Minggu 4: Dataset Collection",
        difficulty: "🔴 Medium-Hard",
        duration: "6-7 hari",
        tutorials: "3 tutorials",
        objectives: &[
            "Systematic face data collection",
            "Multiple angles dan lighting conditions",
            "Dataset organization",
            "Data quality validation",
            "Dataset management system",
        ],
        topics: &[
            Topic {
                title: "01. Capture Faces",
                description: "Basic face capture dari webcam, validation checks, save organized dataset",
            },
            Topic {
                title: "02. Multi-Angle Capture",
                description: "Capture multiple angles (frontal, left, right), lighting variation, quality metrics",
            },
            Topic {
                title: "03. Batch Processing",
                description: "Process multiple images sekaligus, dataset validation, encoding generation",
            },
        ],
        module: Some(ProjectModule {
            file: "dataset_manager.py",
            functions: &[
                "DatasetManager class - Manage face datasets",
                "capture_face() - Capture with validation",
                "add_person() - Add new person to dataset",
                "remove_person() - Remove person from dataset",
                "get_person_images() - Get all images for person",
                "validate_dataset() - Check dataset quality",
                "export_encodings() - Generate encodings for dataset",
            ],
        }),
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-4-dataset-collection/learning
python 01_capture_faces.py
python 02_multi_angle_capture.py
python 03_batch_processing.py

cd ../project
python test_dataset.py",
    },
    WeekContent {
        week: WeekNumber::new(5),
        title: "Minggu 5: Recognition System",
        difficulty: "🟣 Hard",
        duration: "6-7 hari",
        tutorials: "2 tutorials",
        objectives: &[
            "Integrate semua module minggu 1-4",
            "Build complete recognition pipeline",
            "Performance optimization",
            "Error handling dan logging",
            "Service layer architecture",
        ],
        topics: &[
            Topic {
                title: "01. Pipeline Integration",
                description: "Integrate detection + recognition, complete workflow dari input ke output",
            },
            Topic {
                title: "02. Recognition Service",
                description: "Service layer implementation, caching strategies, batch processing, performance optimization",
            },
        ],
        module: Some(ProjectModule {
            file: "recognition_service.py",
            functions: &[
                "RecognitionService class - Main service",
                "process_image() - Full recognition pipeline",
                "process_webcam_frame() - Real-time processing",
                "batch_recognize() - Process multiple images",
                "get_statistics() - Performance metrics",
                "reload_database() - Refresh known faces",
            ],
        }),
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: Some(
            "Input Image
    ↓
Image Utils (preprocess)
    ↓
Face Detector (detect faces)
    ↓
Face Recognizer (identify)
    ↓
Dataset Manager (match to database)
    ↓
Recognition Result",
        ),
        key_concepts: Some(&[
            "Pipeline: Input → Preprocess → Detect → Recognize → Output",
            "Service layer pattern untuk separation of concerns",
            "Caching encodings untuk speed improvement",
            "Batch processing untuk efficiency",
            "Error handling best practices",
        ]),
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-5-recognition-system/learning
python 01_pipeline_integration.py
python 02_recognition_service.py

cd ../project
python test_service.py",
    },
    WeekContent {
        week: WeekNumber::new(6),
        title: "Minggu 6: Database & Attendance",
        difficulty: "🔵 Hard",
        duration: "7-8 hari",
        tutorials: "3 tutorials",
        objectives: &[
            "Setup database MySQL",
            "Database models dan relationships",
            "Attendance record management",
            "CRUD operations",
            "Query dan reporting",
        ],
        topics: &[
            Topic {
                title: "01. Database Setup",
                description: "MySQL & SQLAlchemy setup, connection configuration, database creation",
            },
            Topic {
                title: "02. Models SQLAlchemy",
                description: "Define database models (Person, Attendance), relationships, migrations",
            },
            Topic {
                title: "03. CRUD & Attendance",
                description: "Create, Read, Update, Delete operations. Attendance logic, duplicate prevention, reporting",
            },
        ],
        module: None,
        modules: Some(&[
            "models.py - Database models (Person, Attendance, FaceEncoding)",
            "database.py - MySQL connection, session management, migrations",
            "attendance_service.py - Attendance business logic",
        ]),
        gui_windows: None,
        key_technologies: None,
        testing_modules: None,
        distribution: None,
        database_schema: Some(
            "Person:
- id (PK)
- name
- employee_id
- department
- created_at

Attendance:
- id (PK)
- person_id (FK)
- timestamp
- type (check_in/check_out)
- photo_path
- confidence

FaceEncoding:
- id (PK)
- person_id (FK)
- encoding_data
- created_at",
        ),
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-6-database-attendance/learning
python 01_database_setup.py
python 02_models_sqlalchemy.py
python 03_crud_operations.py

cd ../project
python test_database.py",
    },
    WeekContent {
        week: WeekNumber::new(7),
        title: "Minggu 7: Desktop GUI",
        difficulty: "🟤 Medium",
        duration: "5-6 hari",
        tutorials: "2 tutorials",
        objectives: &[
            "Build desktop interface dengan Tkinter",
            "GUI design principles",
            "Event-driven programming",
            "Multi-window application",
            "Real-time webcam preview di GUI",
        ],
        topics: &[
            Topic {
                title: "01. Tkinter Basics",
                description: "Tkinter fundamentals (widgets, layouts), event handling, layout managers (grid, pack)",
            },
            Topic {
                title: "02. Webcam Preview & Multi-Windows",
                description: "Embed webcam di Tkinter Canvas, multiple windows, threading untuk non-blocking GUI",
            },
        ],
        module: None,
        modules: None,
        gui_windows: Some(&[
            GuiWindow {
                name: "Main Window",
                features: "Live webcam preview, face detection boxes, recognition status, action buttons (Register, Reports)",
            },
            GuiWindow {
                name: "Register Person Window",
                features: "Person info form, webcam preview, capture photos (20+), auto quality validation, progress indicator",
            },
            GuiWindow {
                name: "Attendance Window",
                features: "Real-time recognition, person info display, check-in time, manual override button",
            },
            GuiWindow {
                name: "Reports Window",
                features: "Date range picker, filter by person/department, attendance table, export (Excel/CSV)",
            },
        ]),
        key_technologies: Some(&[
            "Tkinter: Built-in Python GUI framework",
            "Threading: Non-blocking webcam feed",
            "PIL/Pillow: Display images di Canvas",
            "ttk: Modern themed widgets",
            "Queue: Thread-safe communication",
        ]),
        testing_modules: None,
        distribution: None,
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: None,
        deliverables: None,
        commands: "cd minggu-7-desktop-gui/learning
python 01_tkinter_basics.py
python 02_layout_management.py
python 03_webcam_preview.py
python 04_multi_windows.py

cd ../project
python main_app.py",
    },
    WeekContent {
        week: WeekNumber::new(8),
        title: "Minggu 8: Final Testing & Distribution",
        difficulty: "⚫ Medium",
        duration: "5-6 hari",
        tutorials: "3 tutorials",
        objectives: &[
            "Polish UI/UX desktop application",
            "Error handling & validations",
            "Unit testing dengan pytest",
            "Create executable dengan PyInstaller",
            "Application distribution",
        ],
        topics: &[
            Topic {
                title: "01. UI Polish",
                description: "UI improvements (colors, fonts, icons, themes), user experience optimization",
            },
            Topic {
                title: "02. Error Handling",
                description: "Robust error handling, user-friendly error messages, edge case handling",
            },
            Topic {
                title: "03. Unit Testing & PyInstaller",
                description: "Unit tests dengan pytest, test coverage >70%, create .exe dengan PyInstaller",
            },
        ],
        module: None,
        modules: None,
        gui_windows: None,
        key_technologies: None,
        testing_modules: Some(&[
            "tests/test_core.py - Image utils, detector, recognizer tests",
            "tests/test_database.py - SQLite operations, CRUD tests",
            "tests/test_recognition.py - Recognition service, attendance logic",
            "tests/test_integration.py - End-to-end workflow tests",
        ]),
        distribution: Some(&[
            "Option 1: Python Environment (development)",
            "Option 2: Executable (.exe) - PyInstaller --onefile",
            "Option 3: Portable Bundle - PyInstaller --onedir (recommended)",
        ]),
        database_schema: None,
        architecture: None,
        key_concepts: None,
        packaging_commands: Some(
            "# Install PyInstaller
pip install pyinstaller

# Create executable
pyinstaller --onedir --windowed --name=\"AttendanceSystem\" main_app.py

# With custom icon
pyinstaller --onedir --windowed --icon=icon.ico --name=\"AttendanceSystem\" main_app.py",
        ),
        deliverables: Some(&[
            "✅ Polished desktop application",
            "✅ All tests passing with >70% coverage",
            "✅ Executable file (.exe for Windows)",
            "✅ User manual & developer guide",
            "✅ READY-TO-DISTRIBUTE APPLICATION",
        ]),
        commands: "cd minggu-8-final-testing/learning
python 01_ui_polish.py
python 02_error_handling.py
python 03_unit_testing.py

# Run all tests
pytest
pytest --cov=core --cov-report=html

# Create executable
pyinstaller build_exe.spec",
    },
];
